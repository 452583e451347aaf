// COIN-OR CBC adapter
// Translates a knapsack problem into a binary program and solves it through good_lp

use crate::domain::{
    models::{Problem, Solution, SolverConfig, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus,
};
use crate::solver::mip;
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use log::debug;
use std::time::Instant;

pub struct CoinCbcSolver {
    time_limit: Option<f64>,
    verbose: bool,
}

impl CoinCbcSolver {
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

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution> {
        self.validate(problem)?;
        mip::precheck(problem)?;

        let start_time = Instant::now();

        let mut vars = variables!();
        let columns: Vec<GoodLpVariable> = problem
            .items
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective: Expression = problem
            .items
            .iter()
            .zip(&columns)
            .map(|(item, &x)| item.value as f64 * x)
            .sum();
        let weight: Expression = problem
            .items
            .iter()
            .zip(&columns)
            .map(|(item, &x)| item.weight as f64 * x)
            .sum();

        let mut lp_model = vars
            .maximise(objective)
            .using(coin_cbc::coin_cbc)
            .with(weight.leq(problem.capacity as f64));
        lp_model.set_parameter("log", if self.verbose { "1" } else { "0" });
        if let Some(limit) = self.time_limit {
            lp_model.set_parameter("seconds", &limit.to_string());
        }

        let solution_result = lp_model.solve();
        let solve_time = start_time.elapsed().as_secs_f64();

        let statistics = SolverStatistics {
            subsets_enumerated: 0,
            feasible_subsets: 0,
            solve_time_ms: solve_time * 1000.0,
            num_items: problem.num_items() as u32,
        };

        match solution_result {
            Ok(sol) => {
                let column_values: Vec<f64> = columns.iter().map(|&x| sol.value(x)).collect();
                // CBC returns its incumbent when the time limit hits
                let status = match self.time_limit {
                    Some(limit) if solve_time >= limit => SolutionStatus::Feasible,
                    _ => SolutionStatus::Optimal,
                };
                debug!("CBC finished in {:.3} ms", statistics.solve_time_ms);
                mip::build_solution(problem, &column_values, status, statistics)
            }
            Err(ResolutionError::Infeasible) => Err(SolverError::Infeasible),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn is_exact(&self) -> bool {
        false
    }
}
