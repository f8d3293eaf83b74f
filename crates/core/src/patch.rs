//! Field presence for partial updates.
//!
//! Update DTOs model each field as `Option<Option<T>>`:
//!
//! | JSON              | Rust             | Meaning            |
//! |-------------------|------------------|--------------------|
//! | key absent        | `None`           | leave unchanged    |
//! | `"key": null`     | `Some(None)`     | clear the value    |
//! | `"key": value`    | `Some(Some(v))`  | overwrite          |
//!
//! Plain serde collapses `null` into the outer `None`, so fields must opt in
//! with `#[serde(default, deserialize_with = "double_option")]`.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Deserialize a present field (value or `null`) into `Some(..)`.
///
/// Absent fields never reach this function; `#[serde(default)]` fills them
/// with `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Resolve a patch field that targets a `NOT NULL` column.
///
/// Omitted stays `None`; an explicit `null` is rejected.
pub fn non_nullable<T>(
    field: &'static str,
    value: Option<Option<T>>,
) -> Result<Option<T>, CoreError> {
    match value {
        None => Ok(None),
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(CoreError::Validation {
            field,
            message: format!("{field} may not be null"),
        }),
    }
}
