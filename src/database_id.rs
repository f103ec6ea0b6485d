//! Database ID type definitions.

use axum::extract::{Path, rejection::PathRejection};

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
/// The ID of a row in the transaction table.
pub type TransactionId = DatabaseId;
/// The ID of a row in the goal table.
pub type GoalId = DatabaseId;

/// Parse the ID segment of a resource path.
///
/// A segment that is not an integer cannot refer to any record, so it is
/// reported as [crate::Error::NotFound] rather than as a malformed request.
pub(crate) fn parse_id(raw_id: &str) -> Result<DatabaseId, crate::Error> {
    raw_id
        .trim()
        .parse::<DatabaseId>()
        .map_err(|_| crate::Error::NotFound)
}

/// Parse the ID from a resource path that axum may have failed to extract.
///
/// A path axum cannot extract, e.g. one with invalid percent-encoded UTF-8,
/// cannot refer to any record either, so it is also [crate::Error::NotFound].
pub(crate) fn id_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<DatabaseId, crate::Error> {
    match path {
        Ok(Path(raw_id)) => parse_id(&raw_id),
        Err(rejection) => {
            tracing::debug!("could not extract ID from path: {}", rejection.body_text());
            Err(crate::Error::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;

    use crate::Error;

    use super::{id_from_path, parse_id};

    #[test]
    fn parses_integer_id() {
        assert_eq!(parse_id("42"), Ok(42));
    }

    #[test]
    fn non_integer_id_is_not_found() {
        assert_eq!(parse_id("abc"), Err(Error::NotFound));
        assert_eq!(parse_id("1.5"), Err(Error::NotFound));
    }

    #[test]
    fn extracted_path_is_parsed() {
        assert_eq!(id_from_path(Ok(Path("7".to_owned()))), Ok(7));
        assert_eq!(id_from_path(Ok(Path("x".to_owned()))), Err(Error::NotFound));
    }
}
