use serde::{Deserialize, Serialize};

use super::solver_service::{Result, SolverError};
use super::value_objects::{SolutionStatus, SolverBackend};

/// An indivisible object that is either taken whole or left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Position of the item in the input ordering (0-based)
    pub index: usize,
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(index: usize, value: u64, weight: u64) -> Self {
        Self {
            index,
            value,
            weight,
        }
    }
}

/// Complete knapsack problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Problem {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Build a problem from `(value, weight)` pairs, indexing items by position
    pub fn from_pairs(capacity: u64, pairs: &[(u64, u64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(index, &(value, weight))| Item::new(index, value, weight))
            .collect();
        Self { capacity, items }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if at least one non-empty subset fits, i.e. the lightest item fits
    pub fn has_feasible_subset(&self) -> bool {
        self.items.iter().any(|item| item.weight <= self.capacity)
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    /// Largest problem the exhaustive solver accepts. `None` removes the ceiling
    pub max_items: Option<usize>,
    /// Time limit in seconds, honoured by the MIP backends only
    pub time_limit: Option<f64>,
    pub verbose: bool,
}

pub const DEFAULT_MAX_ITEMS: usize = 25;

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::Exhaustive,
            max_items: Some(DEFAULT_MAX_ITEMS),
            time_limit: None,
            verbose: false,
        }
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolverStatistics {
    pub subsets_enumerated: u64,
    pub feasible_subsets: u64,
    pub solve_time_ms: f64,
    pub num_items: u32,
}

/// Solution to a knapsack problem
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub status: SolutionStatus,
    pub total_value: u64,
    /// `selected[i]` is true iff the item with index `i` is taken
    pub selected: Vec<bool>,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, total_value: u64, selected: Vec<bool>) -> Self {
        Self {
            status,
            total_value,
            selected,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(total_value: u64, selected: Vec<bool>) -> Self {
        Self::new(SolutionStatus::Optimal, total_value, selected)
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Indices of the taken items, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &taken)| taken.then_some(i))
            .collect()
    }

    /// Check that this solution is a feasible, self-consistent answer to `problem`.
    ///
    /// Optimality is not checked here; compare against the exhaustive solver for that.
    pub fn verify(&self, problem: &Problem) -> Result<()> {
        if self.selected.len() != problem.num_items() {
            return Err(SolverError::InvalidSolution(format!(
                "selection has {} flags but problem has {} items",
                self.selected.len(),
                problem.num_items()
            )));
        }

        let mut weight: u64 = 0;
        let mut value: u64 = 0;
        for item in problem
            .items
            .iter()
            .filter(|item| self.selected.get(item.index).copied().unwrap_or(false))
        {
            weight = weight.checked_add(item.weight).ok_or_else(|| {
                SolverError::InvalidSolution("selected weight overflows".to_string())
            })?;
            value = value.checked_add(item.value).ok_or(SolverError::ValueOverflow)?;
        }

        if weight > problem.capacity {
            return Err(SolverError::InvalidSolution(format!(
                "selected weight {} exceeds capacity {}",
                weight, problem.capacity
            )));
        }
        if value != self.total_value {
            return Err(SolverError::InvalidSolution(format!(
                "reported value {} but selected items sum to {}",
                self.total_value, value
            )));
        }
        Ok(())
    }
}

// Statistics describe how a solution was found, not what it is
impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.total_value == other.total_value
            && self.selected == other.selected
    }
}

impl Eq for Solution {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_assigns_positions() {
        let problem = Problem::from_pairs(11, &[(8, 4), (10, 5)]);
        assert_eq!(problem.items[0], Item::new(0, 8, 4));
        assert_eq!(problem.items[1], Item::new(1, 10, 5));
        assert_eq!(problem.num_items(), 2);
    }

    #[test]
    fn feasible_subset_needs_one_fitting_item() {
        assert!(!Problem::from_pairs(10, &[]).has_feasible_subset());
        assert!(!Problem::from_pairs(3, &[(5, 4)]).has_feasible_subset());
        assert!(Problem::from_pairs(0, &[(5, 4), (0, 0)]).has_feasible_subset());
    }

    #[test]
    fn verify_accepts_consistent_solution() {
        let problem = Problem::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]);
        let solution = Solution::optimal(220, vec![false, true, true]);
        assert!(solution.verify(&problem).is_ok());
        assert_eq!(solution.selected_indices(), vec![1, 2]);
    }

    #[test]
    fn verify_rejects_overweight_and_wrong_value() {
        let problem = Problem::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]);

        let overweight = Solution::optimal(280, vec![true, true, true]);
        assert!(matches!(
            overweight.verify(&problem),
            Err(SolverError::InvalidSolution(_))
        ));

        let wrong_value = Solution::optimal(200, vec![false, true, true]);
        assert!(matches!(
            wrong_value.verify(&problem),
            Err(SolverError::InvalidSolution(_))
        ));

        let short = Solution::optimal(0, vec![false]);
        assert!(matches!(
            short.verify(&problem),
            Err(SolverError::InvalidSolution(_))
        ));
    }

    #[test]
    fn equality_ignores_statistics() {
        let a = Solution::optimal(5, vec![true]);
        let b = Solution::optimal(5, vec![true]).with_statistics(SolverStatistics {
            subsets_enumerated: 1,
            feasible_subsets: 1,
            solve_time_ms: 0.3,
            num_items: 1,
        });
        assert_eq!(a, b);
    }
}
