//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the closed set of transaction types
//! - Validation of client input for creating and partially updating transactions
//! - Database functions for storing, querying, and managing transactions
//! - Route handlers for the transaction endpoints of the REST API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod state;

pub use core::{
    NewTransaction, Transaction, TransactionType, create_transaction, create_transaction_table,
    get_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use list_endpoint::{get_transaction_endpoint, list_transactions_endpoint};
pub use state::TransactionState;

#[cfg(test)]
pub use core::{count_transactions, get_transaction};
