// Helpers shared by the MIP adapters
// Both backends solve max Σ vᵢxᵢ s.t. Σ wᵢxᵢ ≤ C, xᵢ ∈ {0, 1}

use crate::domain::{
    models::{Problem, Solution, SolverStatistics},
    solver_service::{Result, SolverError},
    value_objects::SolutionStatus,
};

/// Rejections every MIP backend applies before building a model
pub(crate) fn precheck(problem: &Problem) -> Result<()> {
    if !problem.has_feasible_subset() {
        return Err(SolverError::Infeasible);
    }
    Ok(())
}

/// Turn relaxed column values into a domain solution.
///
/// Values are recomputed from the integer item data rather than the float
/// objective. An empty optimum (every fitting item is worth 0) is replaced by
/// the first fitting item so callers always get a non-empty subset.
pub(crate) fn build_solution(
    problem: &Problem,
    column_values: &[f64],
    status: SolutionStatus,
    statistics: SolverStatistics,
) -> Result<Solution> {
    let mut selected = vec![false; problem.num_items()];
    for (item, &x) in problem.items.iter().zip(column_values) {
        selected[item.index] = x > 0.5;
    }

    if !selected.iter().any(|&taken| taken) {
        let first_fit = problem
            .items
            .iter()
            .find(|item| item.weight <= problem.capacity)
            .ok_or(SolverError::Infeasible)?;
        selected[first_fit.index] = true;
    }

    let mut total_value: u64 = 0;
    for item in problem.items.iter().filter(|item| selected[item.index]) {
        total_value = total_value
            .checked_add(item.value)
            .ok_or(SolverError::ValueOverflow)?;
    }

    let solution = Solution::new(status, total_value, selected).with_statistics(statistics);
    solution.verify(problem)?;
    Ok(solution)
}
