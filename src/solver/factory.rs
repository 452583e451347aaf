use crate::domain::{
    models::{Problem, SolverConfig},
    solver_service::{Result, SolverService},
    value_objects::SolverBackend,
};
use crate::solver::ExhaustiveSolver;
#[cfg(feature = "mip")]
use crate::solver::{CoinCbcSolver, HighsSolver};
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a problem: exhaustive when it is under the ceiling,
    /// otherwise the first available MIP backend
    pub fn create_solver(problem: &Problem, config: &SolverConfig) -> Result<Arc<dyn SolverService>> {
        let within_ceiling = config
            .max_items
            .map_or(true, |limit| problem.num_items() <= limit);

        if within_ceiling || !SolverBackend::Highs.is_available() {
            Self::create_from_backend(SolverBackend::Exhaustive, config)
        } else {
            Self::create_from_backend(SolverBackend::Highs, config)
        }
    }

    /// Create a solver for a specific backend
    pub fn create_from_backend(
        backend: SolverBackend,
        config: &SolverConfig,
    ) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Exhaustive => Ok(Arc::new(ExhaustiveSolver::from_config(config))),
            #[cfg(feature = "mip")]
            SolverBackend::CoinCbc => Ok(Arc::new(CoinCbcSolver::from_config(config))),
            #[cfg(feature = "mip")]
            SolverBackend::Highs => Ok(Arc::new(HighsSolver::from_config(config))),
            #[cfg(not(feature = "mip"))]
            SolverBackend::CoinCbc | SolverBackend::Highs => {
                Err(crate::domain::SolverError::SolverNotAvailable(format!(
                    "{} requires building with the `mip` feature",
                    backend
                )))
            }
        }
    }

    /// Get the default solver (exhaustive, default ceiling)
    pub fn default_solver() -> Arc<dyn SolverService> {
        Arc::new(ExhaustiveSolver::new())
    }
}
