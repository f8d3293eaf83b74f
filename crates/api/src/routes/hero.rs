//! Route definitions for the `/heroes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hero;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /heroes/               -> list
/// POST   /heroes/               -> create
/// GET    /heroes/{hero_id}      -> get_by_id
/// PATCH  /heroes/{hero_id}      -> update
/// DELETE /heroes/{hero_id}      -> delete
/// ```
///
/// The collection also answers without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/heroes/", get(hero::list).post(hero::create))
        .route("/heroes", get(hero::list).post(hero::create))
        .route(
            "/heroes/{hero_id}",
            get(hero::get_by_id)
                .patch(hero::update)
                .delete(hero::delete),
        )
}
