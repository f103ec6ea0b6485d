#![allow(missing_docs)]

pub(crate) mod http;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::initialize;

pub(crate) use http::{assert_error_message, assert_status, parse_json_body};

#[track_caller]
pub(crate) fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize(&connection).expect("could not initialize test DB");

    connection
}

#[track_caller]
pub(crate) fn must_create_shared_connection() -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(must_create_test_connection()))
}
