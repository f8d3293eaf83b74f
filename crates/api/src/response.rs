//! Fixed-shape response bodies that are not entity projections.

use serde::Serialize;

/// `{ "message": ... }` returned by the root endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "ok": true }` acknowledgement for deletes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
