//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    db::lock_connection,
    transaction::{
        TransactionState,
        core::{Transaction, create_transaction},
        form::TransactionForm,
    },
    validation::parse_body,
};

/// A route handler for creating a new transaction, responds with the stored transaction.
///
/// The request is validated in full before the database is touched.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let form = parse_body(payload)?;
    let new_transaction = form.validate()?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = create_transaction(&new_transaction, &connection)?;
    tracing::debug!("created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
