#[cfg(test)]
mod tests {
    use std::fs;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use knapsack::{
        parse_problem, ExhaustiveSolver, KnapsackService, Problem, Solution, SolverError,
        SolverService,
    };

    fn read_problem(path: &str) -> Problem {
        let input = fs::read_to_string(path).unwrap();
        parse_problem(&input).unwrap()
    }

    /// Independent reference: every bitmask, ordered by (size, positions), first maximum wins
    fn oracle(problem: &Problem) -> Option<(u64, Vec<usize>)> {
        let n = problem.items.len();
        let mut feasible: Vec<Vec<usize>> = (1u32..(1 << n))
            .map(|mask| (0..n).filter(|&i| mask & (1 << i) != 0).collect::<Vec<_>>())
            .filter(|subset| {
                subset.iter().map(|&i| problem.items[i].weight).sum::<u64>() <= problem.capacity
            })
            .collect();
        feasible.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let mut best: Option<(u64, Vec<usize>)> = None;
        for subset in feasible {
            let value = subset.iter().map(|&i| problem.items[i].value).sum::<u64>();
            if best.as_ref().map_or(true, |(v, _)| value > *v) {
                best = Some((value, subset));
            }
        }
        best
    }

    fn random_problem(rng: &mut SmallRng) -> Problem {
        let n = rng.gen_range(0..=12);
        let pairs: Vec<(u64, u64)> = (0..n)
            .map(|_| (rng.gen_range(0..=30), rng.gen_range(0..=20)))
            .collect();
        let capacity = rng.gen_range(0..=60);
        Problem::from_pairs(capacity, &pairs)
    }

    #[test_case("data/ks_4_0", "19 1\n0 0 1 1"; "ks_4_0")]
    #[test_case("data/ks_3_0", "220 1\n0 1 1"; "three items")]
    #[test_case("data/ks_2_tie", "1 1\n1 0"; "tie keeps first item")]
    fn solves_instance_file(path: &str, expected: &str) {
        let input = fs::read_to_string(path).unwrap();
        let output = KnapsackService::default().solve_text(&input).unwrap();
        assert_eq!(output, expected);
    }

    #[test_case("data/ks_1_infeasible"; "single heavy item")]
    #[test_case("data/ks_0_empty"; "no items")]
    fn infeasible_instance_file(path: &str) {
        let problem = read_problem(path);
        assert!(matches!(
            ExhaustiveSolver::new().solve(&problem),
            Err(SolverError::Infeasible)
        ));
    }

    #[test]
    fn tie_between_single_items_goes_to_earlier_item() {
        let problem = Problem::from_pairs(5, &[(10, 5), (10, 3)]);
        let solution = ExhaustiveSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.total_value, 10);
        assert_eq!(solution.selected, vec![true, false]);
    }

    #[test]
    fn zero_capacity_without_weightless_items_is_infeasible() {
        let problem = Problem::from_pairs(0, &[(4, 1), (9, 2)]);
        assert!(matches!(
            ExhaustiveSolver::new().solve(&problem),
            Err(SolverError::Infeasible)
        ));
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(7; "seed 7")]
    #[test_case(42; "seed 42")]
    #[test_case(1234; "seed 1234")]
    fn matches_bitmask_oracle(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let solver = ExhaustiveSolver::new();

        for _ in 0..40 {
            let problem = random_problem(&mut rng);
            let result = solver.solve(&problem);

            match oracle(&problem) {
                None => assert!(matches!(result, Err(SolverError::Infeasible))),
                Some((value, subset)) => {
                    let solution = result.unwrap();
                    let mut expected = vec![false; problem.items.len()];
                    for i in subset {
                        expected[i] = true;
                    }

                    // feasibility and selection consistency
                    solution.verify(&problem).unwrap();
                    // optimality and tie-break
                    assert_eq!(solution.total_value, value);
                    assert_eq!(solution.selected, expected);
                }
            }
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        let mut rng = SmallRng::seed_from_u64(99);
        let solver = ExhaustiveSolver::new();
        for _ in 0..20 {
            let problem = random_problem(&mut rng);
            let first: Result<Solution, _> = solver.solve(&problem);
            let second = solver.solve(&problem);
            match (first, second) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(SolverError::Infeasible), Err(SolverError::Infeasible)) => {}
                (a, b) => panic!("diverging results: {:?} vs {:?}", a, b),
            }
        }
    }

    #[test]
    fn concurrent_solves_share_nothing() {
        let problem = Problem::from_pairs(11, &[(8, 4), (10, 5), (15, 8), (4, 3)]);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let problem = problem.clone();
                std::thread::spawn(move || ExhaustiveSolver::new().solve(&problem).unwrap())
            })
            .collect();
        for handle in handles {
            let solution = handle.join().unwrap();
            assert_eq!(solution.total_value, 19);
            assert_eq!(solution.selected, vec![false, false, true, true]);
        }
    }

    #[cfg(feature = "mip")]
    #[test_case(3; "seed 3")]
    #[test_case(11; "seed 11")]
    fn mip_backends_agree_with_exhaustive(seed: u64) {
        use knapsack::{CoinCbcSolver, HighsSolver};

        let mut rng = SmallRng::seed_from_u64(seed);
        let backends: Vec<Box<dyn SolverService>> =
            vec![Box::new(CoinCbcSolver::new()), Box::new(HighsSolver::new())];

        for _ in 0..10 {
            let problem = random_problem(&mut rng);
            let reference = ExhaustiveSolver::new().solve(&problem);
            for backend in &backends {
                match (&reference, backend.solve(&problem)) {
                    (Ok(expected), Ok(found)) => {
                        found.verify(&problem).unwrap();
                        assert_eq!(found.total_value, expected.total_value, "{}", backend.name());
                    }
                    (Err(SolverError::Infeasible), Err(SolverError::Infeasible)) => {}
                    (expected, found) => {
                        panic!("{}: {:?} vs {:?}", backend.name(), expected, found)
                    }
                }
            }
        }
    }
}
