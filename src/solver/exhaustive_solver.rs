// Exhaustive reference solver
// Tries every non-empty subset, so it is slow but trivially correct.
// Optimized backends are checked against it.

use crate::domain::{
    models::{Item, Problem, Solution, SolverConfig, SolverStatistics, DEFAULT_MAX_ITEMS},
    solver_service::{Result, SolverError, SolverService},
};
use crate::solver::subsets::{subset_count, SubsetEnumerator};
use log::{debug, warn};
use std::time::Instant;

pub struct ExhaustiveSolver {
    max_items: Option<usize>,
}

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self {
            max_items: Some(DEFAULT_MAX_ITEMS),
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            max_items: config.max_items,
        }
    }

    /// Reject problems with more than `limit` items. `None` removes the ceiling
    pub fn with_max_items(mut self, limit: Option<usize>) -> Self {
        self.max_items = limit;
        self
    }

    fn check_ceiling(&self, problem: &Problem) -> Result<()> {
        match self.max_items {
            Some(limit) if problem.num_items() > limit => Err(SolverError::TooManyItems {
                items: problem.num_items(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum of weights, `None` once it exceeds `u64` (and therefore any capacity)
fn subset_weight(items: &[Item], subset: &[usize]) -> Option<u64> {
    subset
        .iter()
        .try_fold(0u64, |acc, &i| acc.checked_add(items[i].weight))
}

fn subset_value(items: &[Item], subset: &[usize]) -> Result<u64> {
    subset.iter().try_fold(0u64, |acc, &i| {
        acc.checked_add(items[i].value)
            .ok_or(SolverError::ValueOverflow)
    })
}

impl SolverService for ExhaustiveSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution> {
        self.validate(problem)?;
        self.check_ceiling(problem)?;

        let start_time = Instant::now();
        let items = &problem.items;
        if let Some(total) = subset_count(items.len()) {
            debug!("Enumerating {} candidate subsets", total);
        }

        let mut subsets_enumerated: u64 = 0;
        let mut feasible_subsets: u64 = 0;
        let mut best: Option<(u64, Vec<usize>)> = None;

        let mut enumerator = SubsetEnumerator::new(items.len());
        while let Some(subset) = enumerator.next_subset() {
            subsets_enumerated += 1;

            match subset_weight(items, subset) {
                Some(weight) if weight <= problem.capacity => {}
                _ => continue,
            }
            feasible_subsets += 1;

            // strict comparison: the first subset to reach a value keeps it
            let value = subset_value(items, subset)?;
            if best.as_ref().map_or(true, |(best_value, _)| value > *best_value) {
                best = Some((value, subset.to_vec()));
            }
        }

        let statistics = SolverStatistics {
            subsets_enumerated,
            feasible_subsets,
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_items: items.len() as u32,
        };
        debug!(
            "Enumerated {} subsets, {} feasible, in {:.3} ms",
            statistics.subsets_enumerated, statistics.feasible_subsets, statistics.solve_time_ms
        );

        let Some((total_value, winner)) = best else {
            warn!(
                "No subset of {} items fits capacity {}",
                items.len(),
                problem.capacity
            );
            return Err(SolverError::Infeasible);
        };

        let mut selected = vec![false; items.len()];
        for &position in &winner {
            selected[items[position].index] = true;
        }

        Ok(Solution::optimal(total_value, selected).with_statistics(statistics))
    }

    fn name(&self) -> &str {
        "Exhaustive"
    }

    fn is_exact(&self) -> bool {
        true
    }
}
