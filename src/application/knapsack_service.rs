use log::{debug, info};

use super::mappers::{self, ParseError};
use crate::domain::{
    models::{Problem, Solution, SolverConfig},
    solver_service::{SolverError, SolverService},
};
use crate::solver::{ExhaustiveSolver, SolverFactory};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Use case: take a problem, pick a backend, solve, optionally check against the oracle
pub struct KnapsackService {
    config: SolverConfig,
    cross_check: bool,
}

impl KnapsackService {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            cross_check: false,
        }
    }

    /// Verify every solution; answers from inexact backends are also compared
    /// with the exhaustive optimum
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check = enabled;
        self
    }

    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolverError> {
        info!(
            "Solving problem: {} items, capacity {}",
            problem.num_items(),
            problem.capacity
        );

        let solver = SolverFactory::create_from_backend(self.config.backend, &self.config)?;
        info!("Using solver: {}", solver.name());

        let solution = solver.solve(problem)?;
        info!(
            "Status: {}, total value {}",
            solution.status, solution.total_value
        );
        debug!("Statistics: {:?}", solution.statistics);

        if self.cross_check {
            if solver.is_exact() {
                solution.verify(problem)?;
            } else {
                self.check_against_reference(problem, &solution)?;
            }
        }

        Ok(solution)
    }

    /// Verify `solution` and compare its value with the exhaustive optimum
    pub fn check_against_reference(
        &self,
        problem: &Problem,
        solution: &Solution,
    ) -> Result<(), SolverError> {
        solution.verify(problem)?;

        let reference = ExhaustiveSolver::from_config(&self.config).solve(problem)?;
        if reference.total_value != solution.total_value {
            return Err(SolverError::ValueMismatch {
                expected: reference.total_value,
                found: solution.total_value,
            });
        }

        info!("Cross-check passed: exhaustive optimum is {}", reference.total_value);
        Ok(())
    }

    /// Input text in, output text out
    pub fn solve_text(&self, input: &str) -> Result<String, AppError> {
        let problem = mappers::parse_problem(input)?;
        let solution = self.solve(&problem)?;
        Ok(mappers::format_solution(&solution))
    }
}

impl Default for KnapsackService {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
