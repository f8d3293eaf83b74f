use axum::routing::get;
use axum::Router;

use crate::handlers::root;
use crate::state::AppState;

/// Mount the greeting at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root::greet))
}
