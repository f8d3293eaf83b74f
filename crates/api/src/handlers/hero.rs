//! Handlers for the `/heroes` resource.
//!
//! Every handler returns [`HeroPublic`]; the stored row never leaves this
//! module unconverted. Input extractors run before the database session is
//! acquired, so a request that fails validation is answered without a
//! connection.

use axum::extract::State;
use axum::Json;
use heroes_core::error::CoreError;
use heroes_core::types::DbId;
use heroes_db::models::hero::{CreateHero, Hero, HeroPublic, UpdateHero};
use heroes_db::repositories::HeroRepo;
use serde::Deserialize;
use sqlx::MySqlConnection;

use crate::error::{AppError, AppResult};
use crate::extract::{DbSession, ValidJson, ValidPath, ValidQuery};
use crate::query::PaginationParams;
use crate::response::OkResponse;
use crate::state::AppState;

/// Named path parameters for `/heroes/{hero_id}`.
#[derive(Debug, Deserialize)]
pub struct HeroPath {
    pub hero_id: DbId,
}

/// POST /heroes/
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateHero>,
) -> AppResult<Json<HeroPublic>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let hero = HeroRepo::create(&mut session, &input).await?;
    tracing::info!(hero_id = hero.id, "Hero created");
    Ok(Json(hero.into()))
}

/// GET /heroes/?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> AppResult<Json<Vec<HeroPublic>>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let heroes = HeroRepo::list(&mut session, params.limit, params.offset).await?;
    Ok(Json(heroes.into_iter().map(HeroPublic::from).collect()))
}

/// GET /heroes/{hero_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(HeroPath { hero_id }): ValidPath<HeroPath>,
) -> AppResult<Json<HeroPublic>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let hero = find_hero(&mut session, hero_id).await?;
    Ok(Json(hero.into()))
}

/// PATCH /heroes/{hero_id}
///
/// Read, merge the fields present in the body, write back. Concurrent
/// patches to the same hero are last-write-wins.
pub async fn update(
    State(state): State<AppState>,
    ValidPath(HeroPath { hero_id }): ValidPath<HeroPath>,
    ValidJson(input): ValidJson<UpdateHero>,
) -> AppResult<Json<HeroPublic>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    let mut hero = find_hero(&mut session, hero_id).await?;
    hero.apply(input)?;
    HeroRepo::save(&mut session, &hero).await?;

    let hero = find_hero(&mut session, hero_id).await?;
    tracing::info!(hero_id, "Hero updated");
    Ok(Json(hero.into()))
}

/// DELETE /heroes/{hero_id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(HeroPath { hero_id }): ValidPath<HeroPath>,
) -> AppResult<Json<OkResponse>> {
    let mut session = DbSession::acquire(&state.pool).await?;
    if HeroRepo::delete(&mut session, hero_id).await? {
        tracing::info!(hero_id, "Hero deleted");
        Ok(Json(OkResponse { ok: true }))
    } else {
        Err(not_found(hero_id))
    }
}

async fn find_hero(conn: &mut MySqlConnection, id: DbId) -> AppResult<Hero> {
    HeroRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Hero", id })
}
