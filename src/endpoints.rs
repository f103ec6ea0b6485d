//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/goals/{goal_id}', use [format_endpoint].

/// The prefix shared by every API route.
pub const API_PREFIX: &str = "/api";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to list and create savings goals.
pub const GOALS: &str = "/api/goals";
/// The route to get, update and delete a single savings goal.
pub const GOAL: &str = "/api/goals/{goal_id}";
/// The route for the income and expense totals.
pub const INSIGHTS_SUMMARY: &str = "/api/insights/summary";
/// The route for the expense totals per category.
pub const SPENDING_BY_CATEGORY: &str = "/api/insights/spending-by-category";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the text from a left brace up to and including the next
/// right brace, e.g. '{goal_id}' in '/api/goals/{goal_id}'. Only the first
/// parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the original path is returned.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
