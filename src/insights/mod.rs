//! Insights module
//!
//! Read-only summaries derived from the recorded transactions: overall
//! income and expense totals, and expense totals per category.

mod aggregation;
mod handlers;

pub use aggregation::{CategorySpending, Summary};
pub use handlers::{InsightsState, get_spending_by_category_endpoint, get_summary_endpoint};
