//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{TransactionId, id_from_path},
    db::lock_connection,
    transaction::{TransactionState, core::delete_transaction},
};

/// The response body for a deleted transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedTransaction {
    /// A confirmation message for display.
    pub message: String,
    /// The ID of the transaction that was deleted.
    pub id: TransactionId,
}

/// A route handler for deleting a transaction, responds with the deleted ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedTransaction>, Error> {
    let transaction_id = id_from_path(transaction_id)?;

    let connection = lock_connection(&state.db_connection)?;

    match delete_transaction(transaction_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => {
            tracing::debug!("deleted transaction {transaction_id}");
            Ok(Json(DeletedTransaction {
                message: "Transaction deleted successfully".to_owned(),
                id: transaction_id,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };
    use time::macros::date;

    use crate::{
        Error,
        test_utils::must_create_shared_connection,
        transaction::{
            NewTransaction, TransactionState, TransactionType, count_transactions,
            create_transaction, delete_endpoint::DeletedTransaction, delete_transaction_endpoint,
            get_transaction,
        },
    };

    fn state_with_transaction() -> TransactionState {
        let state = TransactionState {
            db_connection: must_create_shared_connection(),
        };
        create_transaction(
            &NewTransaction {
                transaction_type: TransactionType::Expense,
                category: "Test".to_owned(),
                amount: 1.23,
                date: date!(2025 - 10 - 26),
                description: None,
            },
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        state
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = state_with_transaction();

        let Json(got) =
            delete_transaction_endpoint(State(state.clone()), Ok(Path("1".to_owned())))
                .await
                .unwrap();

        assert_eq!(
            got,
            DeletedTransaction {
                message: "Transaction deleted successfully".to_owned(),
                id: 1
            }
        );
        assert_eq!(
            get_transaction(1, &state.db_connection.lock().unwrap()),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_not_found() {
        let state = state_with_transaction();

        let result =
            delete_transaction_endpoint(State(state.clone()), Ok(Path("99".to_owned()))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
        assert_eq!(
            count_transactions(&state.db_connection.lock().unwrap()),
            Ok(1)
        );
    }
}
