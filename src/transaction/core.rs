//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The text used for this type in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidEnum(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// What the money was for, e.g. "Groceries" or "Salary".
    pub category: String,
    /// The amount of money spent or earned, always greater than zero.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// An optional note about the transaction.
    pub description: Option<String>,
}

/// A validated transaction that has not been saved yet.
///
/// Use [crate::transaction::TransactionForm::validate] to create one from
/// client input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// What the money was for. Must not be empty.
    pub category: String,
    /// The amount of money, must be greater than zero.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// An optional note, `None` rather than an empty string.
    pub description: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

type RowsAffected = usize;

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return an [Error::StorageError] if there is an SQL error.
pub fn create_transaction(
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, category, amount, date, description",
        )?
        .query_row(
            params![
                transaction.transaction_type,
                transaction.category,
                transaction.amount,
                transaction.date,
                transaction.description,
            ],
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::StorageError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Get all transactions, optionally only those of `transaction_type`.
///
/// Transactions are sorted by date from newest to oldest. Transactions on the
/// same date are sorted with the most recently created first.
///
/// # Errors
/// This function will return an [Error::StorageError] if there is an SQL error.
pub fn get_transactions(
    transaction_type: Option<TransactionType>,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let mut statement = match transaction_type {
        Some(_) => connection.prepare(
            "SELECT id, type, category, amount, date, description FROM \"transaction\" \
            WHERE type = ?1 \
            ORDER BY date DESC, id DESC",
        )?,
        None => connection.prepare(
            "SELECT id, type, category, amount, date, description FROM \"transaction\" \
            ORDER BY date DESC, id DESC",
        )?,
    };

    let rows = match transaction_type {
        Some(transaction_type) => {
            statement.query_map(params![transaction_type], map_transaction_row)?
        }
        None => statement.query_map([], map_transaction_row)?,
    };

    rows.map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the stored transaction with the same ID as `transaction`.
///
/// Returns the number of rows affected, which is zero if the transaction does not exist.
///
/// # Errors
/// This function will return an [Error::StorageError] if there is an SQL error.
pub fn update_transaction(
    transaction: &Transaction,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE \"transaction\" \
            SET \
                type = ?1, \
                category = ?2, \
                amount = ?3, \
                date = ?4, \
                description = ?5 \
            WHERE id = ?6",
            params![
                transaction.transaction_type,
                transaction.category,
                transaction.amount,
                transaction.date,
                transaction.description,
                transaction.id,
            ],
        )
        .map_err(Error::from)
}

/// Delete the transaction with `id`.
///
/// Returns the number of rows affected, which is zero if the transaction does not exist.
///
/// # Errors
/// This function will return an [Error::StorageError] if there is an SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::StorageError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    // Used by the default ordering of the transaction list.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date, id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod transaction_type_tests {
    use crate::Error;

    use super::TransactionType;

    #[test]
    fn parses_known_types() {
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
    }

    #[test]
    fn rejects_unknown_types() {
        assert_eq!(
            "Income".parse::<TransactionType>(),
            Err(Error::InvalidEnum("Income".to_owned()))
        );
        assert_eq!(
            "bogus".parse::<TransactionType>(),
            Err(Error::InvalidEnum("bogus".to_owned()))
        );
    }

    #[test]
    fn serializes_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
    }
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{Error, db::initialize};

    use super::{
        NewTransaction, Transaction, TransactionType, count_transactions, create_transaction,
        delete_transaction, get_transaction, get_transactions, update_transaction,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(
        transaction_type: TransactionType,
        amount: f64,
        date: time::Date,
    ) -> NewTransaction {
        NewTransaction {
            transaction_type,
            category: "Food".to_owned(),
            amount,
            date,
            description: None,
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();
        let want = NewTransaction {
            transaction_type: TransactionType::Expense,
            category: "Groceries".to_owned(),
            amount: 12.3,
            date: date!(2025 - 10 - 05),
            description: Some("weekly shop".to_owned()),
        };

        let got = create_transaction(&want, &conn).expect("could not create transaction");

        assert_eq!(
            got,
            Transaction {
                id: 1,
                transaction_type: want.transaction_type,
                category: want.category,
                amount: want.amount,
                date: want.date,
                description: want.description,
            }
        );
    }

    #[test]
    fn get_returns_created_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(
            &new_transaction(TransactionType::Income, 1234.56, date!(2025 - 01 - 31)),
            &conn,
        )
        .unwrap();

        let got = get_transaction(created.id, &conn);

        assert_eq!(got, Ok(created));
    }

    #[test]
    fn get_missing_transaction_is_not_found() {
        let conn = get_test_connection();

        assert_eq!(get_transaction(1337, &conn), Err(Error::NotFound));
    }

    #[test]
    fn list_orders_by_date_then_id_descending() {
        let conn = get_test_connection();
        let older = create_transaction(
            &new_transaction(TransactionType::Expense, 1.0, date!(2025 - 01 - 01)),
            &conn,
        )
        .unwrap();
        let newest_first = create_transaction(
            &new_transaction(TransactionType::Expense, 2.0, date!(2025 - 03 - 01)),
            &conn,
        )
        .unwrap();
        let newest_second = create_transaction(
            &new_transaction(TransactionType::Income, 3.0, date!(2025 - 03 - 01)),
            &conn,
        )
        .unwrap();

        let got = get_transactions(None, &conn).unwrap();

        assert_eq!(got, vec![newest_second, newest_first, older]);
    }

    #[test]
    fn list_filters_by_type() {
        let conn = get_test_connection();
        let income = create_transaction(
            &new_transaction(TransactionType::Income, 100.0, date!(2025 - 01 - 01)),
            &conn,
        )
        .unwrap();
        create_transaction(
            &new_transaction(TransactionType::Expense, 40.0, date!(2025 - 01 - 02)),
            &conn,
        )
        .unwrap();

        let got = get_transactions(Some(TransactionType::Income), &conn).unwrap();

        assert_eq!(got, vec![income]);
    }

    #[test]
    fn update_overwrites_all_fields() {
        let conn = get_test_connection();
        let created = create_transaction(
            &new_transaction(TransactionType::Expense, 1.0, date!(2025 - 01 - 01)),
            &conn,
        )
        .unwrap();
        let want = Transaction {
            id: created.id,
            transaction_type: TransactionType::Income,
            category: "Salary".to_owned(),
            amount: 2500.0,
            date: date!(2025 - 02 - 01),
            description: Some("February".to_owned()),
        };

        let rows_affected = update_transaction(&want, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_transaction(created.id, &conn), Ok(want));
    }

    #[test]
    fn update_missing_transaction_affects_no_rows() {
        let conn = get_test_connection();
        let transaction = Transaction {
            id: 42,
            transaction_type: TransactionType::Income,
            category: "Salary".to_owned(),
            amount: 1.0,
            date: date!(2025 - 02 - 01),
            description: None,
        };

        assert_eq!(update_transaction(&transaction, &conn), Ok(0));
    }

    #[test]
    fn delete_removes_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(
            &new_transaction(TransactionType::Expense, 1.0, date!(2025 - 01 - 01)),
            &conn,
        )
        .unwrap();

        let rows_affected = delete_transaction(created.id, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_transaction(created.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_transaction_leaves_store_unchanged() {
        let conn = get_test_connection();
        create_transaction(
            &new_transaction(TransactionType::Expense, 1.0, date!(2025 - 01 - 01)),
            &conn,
        )
        .unwrap();

        let rows_affected = delete_transaction(999, &conn);

        assert_eq!(rows_affected, Ok(0));
        assert_eq!(count_transactions(&conn), Ok(1));
    }

    #[test]
    fn database_rejects_unknown_type() {
        let conn = get_test_connection();

        let result = conn.execute(
            "INSERT INTO \"transaction\" (type, category, amount, date) VALUES ('bogus', 'Food', 1.0, '2025-01-01')",
            (),
        );

        assert!(result.is_err(), "CHECK constraint should reject the row");
    }
}
