// HiGHS Solver Adapter
// Implements the SolverService interface for HiGHS
// Each item becomes an integer column in [0, 1]; capacity is the single row

use crate::domain::{
    models::{Problem, Solution, SolverConfig, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus,
};
use crate::solver::mip;
use log::debug;
use std::time::Instant;

pub struct HighsSolver {
    time_limit: Option<f64>,
    verbose: bool,
}

impl HighsSolver {
    pub fn new() -> Self {
        Self {
            time_limit: None,
            verbose: false,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            time_limit: config.time_limit,
            verbose: config.verbose,
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution> {
        self.validate(problem)?;
        mip::precheck(problem)?;

        let start_time = Instant::now();

        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let columns: Vec<_> = problem
            .items
            .iter()
            .map(|item| pb.add_integer_column(item.value as f64, 0.0..=1.0))
            .collect();

        let terms: Vec<_> = problem
            .items
            .iter()
            .zip(&columns)
            .map(|(item, &col)| (col, item.weight as f64))
            .collect();
        pb.add_row(..=problem.capacity as f64, &terms);

        let mut model = pb.optimise(Sense::Maximise);
        model.set_option("output_flag", self.verbose);
        if let Some(limit) = self.time_limit {
            model.set_option("time_limit", limit);
        }

        let solved = model.solve();
        let statistics = SolverStatistics {
            subsets_enumerated: 0,
            feasible_subsets: 0,
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_items: problem.num_items() as u32,
        };
        debug!(
            "HiGHS finished with {:?} in {:.3} ms",
            solved.status(),
            statistics.solve_time_ms
        );

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                mip::build_solution(
                    problem,
                    solution_data.columns(),
                    SolutionStatus::Optimal,
                    statistics,
                )
            }
            HighsModelStatus::ReachedTimeLimit => {
                let solution_data = solved.get_solution();
                mip::build_solution(
                    problem,
                    solution_data.columns(),
                    SolutionStatus::Feasible,
                    statistics,
                )
            }
            HighsModelStatus::Infeasible => Err(SolverError::Infeasible),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn is_exact(&self) -> bool {
        false
    }
}
