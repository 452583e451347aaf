// Domain value objects representing core business concepts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a knapsack solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// No feasible subset has a greater total value
    Optimal,
    /// Feasible, but the backend could not prove optimality (e.g. time limit reached)
    Feasible,
}

impl SolutionStatus {
    /// Flag written after the total value in the text output
    pub fn as_flag(&self) -> u8 {
        match self {
            SolutionStatus::Optimal => 1,
            SolutionStatus::Feasible => 0,
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Feasible => write!(f, "Feasible"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    /// Enumerate every subset (reference solver)
    #[default]
    Exhaustive,
    /// COIN-OR CBC through good_lp
    CoinCbc,
    /// HiGHS
    Highs,
}

impl SolverBackend {
    /// Whether this backend is compiled into the current build
    pub fn is_available(&self) -> bool {
        match self {
            SolverBackend::Exhaustive => true,
            SolverBackend::CoinCbc | SolverBackend::Highs => cfg!(feature = "mip"),
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Exhaustive => write!(f, "Exhaustive"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

impl FromStr for SolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(SolverBackend::Exhaustive),
            "cbc" | "coin_cbc" | "coin-cbc" => Ok(SolverBackend::CoinCbc),
            "highs" => Ok(SolverBackend::Highs),
            other => Err(format!(
                "unknown solver backend '{}' (expected exhaustive, cbc or highs)",
                other
            )),
        }
    }
}
