// Domain service interface for solving knapsack problems
// Every backend (exhaustive reference, MIP adapters) implements this contract

use super::models::{Problem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Infeasible: no non-empty subset of items fits within the capacity")]
    Infeasible,

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Problem has {items} items, exhaustive search is limited to {limit}")]
    TooManyItems { items: usize, limit: usize },

    #[error("Total value overflows a 64-bit integer")]
    ValueOverflow,

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid solution: {0}")]
    InvalidSolution(String),

    #[error("Value mismatch: reference solver found {expected}, backend found {found}")]
    ValueMismatch { expected: u64, found: u64 },
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for knapsack solvers
///
/// Backends are interchangeable: the exhaustive solver is the reference oracle,
/// the others must agree with it on the total value.
pub trait SolverService: Send + Sync {
    /// Solve a knapsack problem
    fn solve(&self, problem: &Problem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &Problem) -> Result<()> {
        let num_items = problem.num_items();
        let mut errors = Vec::new();
        let mut seen = vec![false; num_items];

        for (position, item) in problem.items.iter().enumerate() {
            match seen.get_mut(item.index) {
                Some(true) => errors.push(format!(
                    "Item at position {} reuses index {}",
                    position, item.index
                )),
                Some(slot) => *slot = true,
                None => errors.push(format!(
                    "Item at position {} has index {} but problem has {} items",
                    position, item.index, num_items
                )),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Whether ties are broken by the deterministic enumeration order
    fn is_exact(&self) -> bool;
}
