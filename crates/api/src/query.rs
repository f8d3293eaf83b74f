//! Query parameter types for API handlers.

use serde::Deserialize;
use validator::Validate;

/// Page size used when `?limit=` is omitted. Also the largest accepted value.
pub const DEFAULT_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Offset/limit pagination (`?offset=&limit=`).
///
/// Out-of-range values are rejected with 422 rather than clamped.
#[derive(Debug, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be greater than or equal to 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(
        min = 0,
        max = 100,
        message = "limit must be between 0 and 100"
    ))]
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn parse(qs: &str) -> PaginationParams {
        let uri: Uri = format!("/heroes/?{qs}").parse().unwrap();
        Query::<PaginationParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn defaults_to_first_hundred() {
        let params = parse("");
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn limit_of_one_hundred_is_accepted() {
        assert!(parse("limit=100").validate().is_ok());
    }

    #[test]
    fn limit_above_one_hundred_is_rejected() {
        let errors = parse("limit=101").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("limit"));
    }

    #[test]
    fn non_integer_limit_fails_to_parse() {
        let uri: Uri = "/heroes/?limit=lots".parse().unwrap();
        assert!(Query::<PaginationParams>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let errors = parse("offset=-1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("offset"));
    }
}
