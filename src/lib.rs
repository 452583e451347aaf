// Domain layer: Knapsack models and the solver contract
pub mod domain;

// Application layer: Text mapping and the solve use case
pub mod application;

// Infrastructure layer: Command line, config file, logging
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Item, Problem, Solution, SolutionStatus, SolverBackend, SolverConfig, SolverError,
    SolverService, SolverStatistics,
};

pub use application::{format_solution, parse_problem, AppError, KnapsackService, ParseError};

pub use solver::{ExhaustiveSolver, SolverFactory, SubsetEnumerator};

#[cfg(feature = "mip")]
pub use solver::{CoinCbcSolver, HighsSolver};
