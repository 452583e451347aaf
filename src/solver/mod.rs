// Solver adapters: concrete implementations of SolverService

pub mod exhaustive_solver;
pub mod factory;
pub mod subsets;

#[cfg(feature = "mip")]
pub mod coin_cbc_solver;
#[cfg(feature = "mip")]
pub mod highs_solver;
#[cfg(feature = "mip")]
mod mip;

pub use exhaustive_solver::ExhaustiveSolver;
pub use factory::SolverFactory;
pub use subsets::SubsetEnumerator;

#[cfg(feature = "mip")]
pub use coin_cbc_solver::CoinCbcSolver;
#[cfg(feature = "mip")]
pub use highs_solver::HighsSolver;
