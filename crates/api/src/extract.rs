//! Request extractors.
//!
//! Every input rejection is routed through [`AppError`] so malformed bodies,
//! queries and path segments all produce the same 422 JSON shape.

use std::ops::{Deref, DerefMut};

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use heroes_db::DbPool;
use serde::de::DeserializeOwned;
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlConnection};
use validator::Validate;

use crate::error::{AppError, InputSource};

/// A database session scoped to a single request.
///
/// Handlers acquire it explicitly, after every input extractor has succeeded,
/// so malformed requests never touch the pool. The connection goes back to
/// the pool when this value is dropped, which happens on every exit path of
/// the handler.
pub struct DbSession(PoolConnection<MySql>);

impl DbSession {
    pub async fn acquire(pool: &DbPool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        Ok(Self(conn))
    }
}

impl Deref for DbSession {
    type Target = MySqlConnection;

    fn deref(&self) -> &MySqlConnection {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut MySqlConnection {
        &mut self.0
    }
}

/// JSON body that has been deserialized and passed its `validator` rules.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejection {
                origin: InputSource::Body,
                field: json_rejection_field(&rejection),
                message: rejection.body_text(),
            })?;

        value.validate().map_err(|errors| AppError::Validation {
            origin: InputSource::Body,
            errors,
        })?;

        Ok(Self(value))
    }
}

/// Query string that has been deserialized and passed its `validator` rules.
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Rejection {
                origin: InputSource::Query,
                field: None,
                message: rejection.body_text(),
            })?;

        value.validate().map_err(|errors| AppError::Validation {
            origin: InputSource::Query,
            errors,
        })?;

        Ok(Self(value))
    }
}

/// Path parameters whose parse failures surface as 422 instead of axum's 400.
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Rejection {
                origin: InputSource::Path,
                field: path_rejection_field(&rejection),
                message: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Name of the path parameter that failed to parse, when axum reports one.
///
/// Only keyed extraction (a struct of named parameters) carries the key.
fn path_rejection_field(rejection: &PathRejection) -> Option<String> {
    let PathRejection::FailedToDeserializePathParams(err) = rejection else {
        return None;
    };
    match err.kind() {
        ErrorKind::ParseErrorAtKey { key, .. } | ErrorKind::DeserializeError { key, .. } => {
            Some(key.clone())
        }
        _ => None,
    }
}

/// Name of the offending body field for data errors.
///
/// axum renders these as `<summary>: <path>: <serde message>`, or
/// `<summary>: missing field `<name>` ...` when the error sits at the root.
/// Syntax errors and content-type problems have no field.
fn json_rejection_field(rejection: &JsonRejection) -> Option<String> {
    let JsonRejection::JsonDataError(err) = rejection else {
        return None;
    };
    field_from_data_error(&err.body_text())
}

fn field_from_data_error(text: &str) -> Option<String> {
    let (_, detail) = text.split_once(": ")?;

    if let Some(rest) = detail.strip_prefix("missing field `") {
        return rest.split_once('`').map(|(name, _)| name.to_string());
    }

    let (path, _) = detail.split_once(": ")?;
    (!path.is_empty() && !path.contains(' ')).then(|| path.to_string())
}
