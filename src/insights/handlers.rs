//! Route handlers for the insights endpoints.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    db::lock_connection,
    insights::aggregation::{CategorySpending, Summary, spending_by_category, summarize},
    transaction::{Transaction, get_transactions},
};

/// The state needed for computing insights.
#[derive(Debug, Clone)]
pub struct InsightsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for InsightsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for the spending by category endpoint.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingByCategory {
    /// Expense totals per category, largest first.
    pub spending_by_category: Vec<CategorySpending>,
}

fn load_all_transactions(state: &InsightsState) -> Result<Vec<Transaction>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    get_transactions(None, &connection)
}

/// A route handler for the income, expense and net balance totals.
pub async fn get_summary_endpoint(
    State(state): State<InsightsState>,
) -> Result<Json<Summary>, Error> {
    let transactions = load_all_transactions(&state)?;

    Ok(Json(summarize(&transactions)))
}

/// A route handler for the expense totals grouped by category.
pub async fn get_spending_by_category_endpoint(
    State(state): State<InsightsState>,
) -> Result<Json<SpendingByCategory>, Error> {
    let transactions = load_all_transactions(&state)?;

    Ok(Json(SpendingByCategory {
        spending_by_category: spending_by_category(&transactions),
    }))
}
