//! Budget Tracker is a small service for keeping track of your income,
//! expenses and savings goals.
//!
//! This library provides a JSON REST API for transactions and savings goals
//! backed by a SQLite database, plus read-only insights derived from the
//! recorded transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
pub mod endpoints;
mod goal;
mod insights;
mod logging;
mod routing;
mod transaction;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::{DatabaseId, GoalId, TransactionId};
pub use db::initialize as initialize_db;
pub use goal::{Goal, NewGoal, create_goal};
pub use insights::{CategorySpending, Summary};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{NewTransaction, Transaction, TransactionType, create_transaction};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A field that is required to create a record was not provided.
    ///
    /// Empty strings and `null` count as not provided.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A transaction type other than "income" or "expense" was given, either
    /// in a request body or as a list filter.
    #[error("invalid transaction type \"{0}\", must be either \"income\" or \"expense\"")]
    InvalidEnum(String),

    /// An amount could not be parsed as a number or was out of range.
    #[error("invalid {field}, must be {requirement}")]
    InvalidAmount {
        /// The name of the offending field.
        field: &'static str,
        /// A description of the values the field accepts.
        requirement: &'static str,
    },

    /// A text field was empty after trimming whitespace.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A date was not in the format YYYY-MM-DD or is not a real calendar date.
    #[error("invalid {field} \"{value}\", expected a valid date in the format YYYY-MM-DD")]
    InvalidDate {
        /// The name of the offending field.
        field: &'static str,
        /// The text that was submitted.
        value: String,
    },

    /// A goal would have more money saved than its target.
    #[error("current amount ({current_amount}) cannot exceed target amount ({target_amount})")]
    InvariantViolation {
        /// The resolved amount saved so far.
        current_amount: f64,
        /// The resolved target amount.
        target_amount: f64,
    },

    /// The request body could not be parsed as the expected JSON object.
    #[error("could not parse the request body: {0}")]
    MalformedBody(String),

    /// The query string could not be parsed, e.g. a parameter was given twice.
    #[error("could not parse the query string: {0}")]
    MalformedQuery(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error string should only be logged for debugging on the server.
    /// The client only ever sees a generic internal server error.
    #[error("an unexpected SQL error occurred: {0}")]
    StorageError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::StorageError(error)
            }
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::InvalidEnum(_)
            | Error::InvalidAmount { .. }
            | Error::EmptyField(_)
            | Error::InvalidDate { .. }
            | Error::InvariantViolation { .. }
            | Error::MalformedBody(_)
            | Error::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::StorageError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = if status_code.is_server_error() {
            // Any errors that are not handled above are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorBody { error: message })).into_response()
    }
}
