//! Field rules shared by the transaction and goal request validators.

use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::{Date, macros::format_description};

use crate::Error;

/// An amount as submitted by a client.
///
/// Browser forms submit numbers as strings, so both `12.5` and `"12.5"` are
/// accepted. Whether the value is actually a valid amount is decided during
/// validation, so a value of the wrong JSON type is reported as an invalid
/// amount rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(f64),
    /// A JSON string that should contain a number.
    Text(String),
    /// Any other JSON value, e.g. `true` or `[]`. Never a valid amount.
    Other(Value),
}

impl AmountInput {
    fn to_f64(&self) -> Option<f64> {
        let number = match self {
            AmountInput::Number(number) => *number,
            AmountInput::Text(text) => text.trim().parse().ok()?,
            AmountInput::Other(_) => return None,
        };

        number.is_finite().then_some(number)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

/// Unwrap a JSON request body, turning axum's rejection into a JSON error.
///
/// # Errors
/// Returns [Error::MalformedBody] if the body is not valid JSON, has the wrong
/// content type or does not match the shape of `T`.
pub(crate) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(Error::MalformedBody(rejection.body_text())),
    }
}

/// Unwrap the query string of a request, turning axum's rejection into a JSON error.
///
/// # Errors
/// Returns [Error::MalformedQuery] if the query string does not match the shape
/// of `T`, e.g. a parameter is repeated.
pub(crate) fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => Err(Error::MalformedQuery(rejection.body_text())),
    }
}

/// Deserialize a text field that may hold any JSON value.
///
/// Strings are kept as is and `null` is treated as absent. Other values are
/// kept as their JSON text, e.g. `5` becomes `"5"`, so that validation can
/// report them the same way as any other bad text.
pub(crate) fn deserialize_any_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Deserialize a present field as `Some`, so that `null` becomes `Some(None)`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` field this
/// distinguishes a missing field (`None`) from an explicit `null`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Get a field that must be supplied when creating a record.
///
/// # Errors
/// Returns [Error::MissingField] if `value` is `None` or an empty string.
pub(crate) fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::MissingField(field)),
    }
}

/// Trim `value` and check that there is some text left.
///
/// # Errors
/// Returns [Error::EmptyField] if `value` only contains whitespace.
pub(crate) fn non_empty_text(value: &str, field: &'static str) -> Result<String, Error> {
    let text = value.trim();

    if text.is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(text.to_owned())
    }
}

/// Trim an optional text field, treating empty text as absent.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Parse an amount that must be strictly greater than zero.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `value` is not a finite number greater than zero.
pub(crate) fn positive_amount(value: &AmountInput, field: &'static str) -> Result<f64, Error> {
    match value.to_f64() {
        Some(amount) if amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount {
            field,
            requirement: "a positive number",
        }),
    }
}

/// Parse an amount that must be zero or more.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `value` is not a finite number of at least zero.
pub(crate) fn non_negative_amount(value: &AmountInput, field: &'static str) -> Result<f64, Error> {
    match value.to_f64() {
        Some(amount) if amount >= 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount {
            field,
            requirement: "a non-negative number",
        }),
    }
}

/// Parse a date in the format YYYY-MM-DD.
///
/// The text must have exactly four year digits, two month digits and two day
/// digits separated by hyphens, and it must name a day that exists in the
/// calendar, e.g. "2024-02-30" is rejected.
///
/// # Errors
/// Returns [Error::InvalidDate] if either check fails.
pub(crate) fn parse_date(value: &str, field: &'static str) -> Result<Date, Error> {
    let invalid_date = || Error::InvalidDate {
        field,
        value: value.to_owned(),
    };

    if !has_date_shape(value) {
        return Err(invalid_date());
    }

    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| invalid_date())
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
