//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::id_from_path,
    db::lock_connection,
    transaction::{
        TransactionState,
        core::{Transaction, TransactionType, get_transaction, get_transactions},
    },
    validation::parse_query,
};

/// The query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListQuery {
    /// Only list transactions of this type. An empty string lists every transaction.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
}

impl TransactionListQuery {
    fn type_filter(&self) -> Result<Option<TransactionType>, Error> {
        match self.transaction_type.as_deref() {
            None | Some("") => Ok(None),
            Some(transaction_type) => transaction_type.parse().map(Some),
        }
    }
}

/// The response body for listing transactions.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    /// The transactions, newest first.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing transactions, optionally filtered by type.
///
/// An unknown type or a malformed query string is rejected before the
/// database is queried.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    query: Result<Query<TransactionListQuery>, QueryRejection>,
) -> Result<Json<TransactionList>, Error> {
    let type_filter = parse_query(query)?.type_filter()?;

    let connection = lock_connection(&state.db_connection)?;
    let transactions = get_transactions(type_filter, &connection)?;

    Ok(Json(TransactionList { transactions }))
}

/// A route handler for getting a single transaction by its ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = id_from_path(transaction_id)?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = get_transaction(transaction_id, &connection)?;

    Ok(Json(transaction))
}
