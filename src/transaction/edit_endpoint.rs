//! Defines the endpoint for partially updating a transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::id_from_path,
    db::lock_connection,
    transaction::{
        TransactionState,
        core::{Transaction, get_transaction, update_transaction},
        form::TransactionForm,
    },
    validation::parse_body,
};

/// A route handler for updating some or all of the fields of a transaction.
///
/// Fields missing from the request body keep their stored values. Reading the
/// stored transaction, validating the merged result and writing it back happen
/// in one database transaction, so concurrent updates to the same transaction
/// cannot overwrite each other's changes.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = id_from_path(transaction_id)?;
    let form = parse_body(payload)?;

    let connection = lock_connection(&state.db_connection)?;
    let db_transaction = connection.unchecked_transaction()?;

    let stored = get_transaction(transaction_id, &db_transaction)?;
    let updated = form.apply_to(stored)?;

    if update_transaction(&updated, &db_transaction)? == 0 {
        tracing::error!(
            "Could not update transaction {transaction_id}: update returned zero rows affected"
        );
        return Err(Error::NotFound);
    }

    db_transaction.commit()?;
    tracing::debug!("updated transaction {transaction_id}");

    Ok(Json(updated))
}

#[cfg(test)]
mod test {
    use axum::{
        Json,
        extract::{Path, State},
    };
    use time::macros::date;

    use crate::{
        Error,
        test_utils::must_create_shared_connection,
        transaction::{
            NewTransaction, Transaction, TransactionForm, TransactionState, TransactionType,
            create_transaction, edit_transaction_endpoint, get_transaction,
        },
        validation::AmountInput,
    };

    fn state_with_transaction() -> (TransactionState, Transaction) {
        let state = TransactionState {
            db_connection: must_create_shared_connection(),
        };
        let transaction = create_transaction(
            &NewTransaction {
                transaction_type: TransactionType::Expense,
                category: "Food".to_owned(),
                amount: 1.23,
                date: date!(2025 - 10 - 27),
                description: Some("test".to_owned()),
            },
            &state.db_connection.lock().unwrap(),
        )
        .expect("could not create test transaction");

        (state, transaction)
    }

    #[track_caller]
    fn must_get_transaction(state: &TransactionState, id: i64) -> Transaction {
        get_transaction(id, &state.db_connection.lock().unwrap())
            .expect("could not get test transaction")
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let (state, transaction) = state_with_transaction();
        let form = TransactionForm {
            transaction_type: Some("income".to_owned()),
            category: Some("Refund".to_owned()),
            amount: Some(AmountInput::Number(3.21)),
            date: Some("2025-10-28".to_owned()),
            description: Some(Some("foo".to_owned())),
        };
        let want = Transaction {
            id: transaction.id,
            transaction_type: TransactionType::Income,
            category: "Refund".to_owned(),
            amount: 3.21,
            date: date!(2025 - 10 - 28),
            description: Some("foo".to_owned()),
        };

        let Json(got) = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(transaction.id.to_string())),
            Ok(Json(form)),
        )
        .await
        .unwrap();

        assert_eq!(got, want);
        assert_eq!(must_get_transaction(&state, transaction.id), want);
    }

    #[tokio::test]
    async fn omitted_fields_keep_their_values() {
        let (state, transaction) = state_with_transaction();
        let form = TransactionForm {
            amount: Some(AmountInput::Number(9.99)),
            ..Default::default()
        };

        let Json(got) = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(transaction.id.to_string())),
            Ok(Json(form)),
        )
        .await
        .unwrap();

        let want = Transaction {
            amount: 9.99,
            ..transaction
        };
        assert_eq!(got, want);
        assert_eq!(must_get_transaction(&state, want.id), want);
    }

    #[tokio::test]
    async fn invalid_update_leaves_transaction_unchanged() {
        let (state, transaction) = state_with_transaction();
        let form = TransactionForm {
            category: Some("Other".to_owned()),
            amount: Some(AmountInput::Number(0.0)),
            ..Default::default()
        };

        let result = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(transaction.id.to_string())),
            Ok(Json(form)),
        )
        .await;

        assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        assert_eq!(must_get_transaction(&state, transaction.id), transaction);
    }

    #[tokio::test]
    async fn repeating_an_update_gives_the_same_result() {
        let (state, transaction) = state_with_transaction();
        let form = TransactionForm {
            category: Some("Dining".to_owned()),
            ..Default::default()
        };

        let Json(first) = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(transaction.id.to_string())),
            Ok(Json(form.clone())),
        )
        .await
        .unwrap();
        let Json(second) = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(transaction.id.to_string())),
            Ok(Json(form)),
        )
        .await
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(must_get_transaction(&state, transaction.id), second);
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let (state, _) = state_with_transaction();

        let result = edit_transaction_endpoint(
            State(state),
            Ok(Path("42".to_owned())),
            Ok(Json(TransactionForm::default())),
        )
        .await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}
