//! Hero endpoints
//!
//! Every handler runs in its own [`Session`]. Writes commit explicitly;
//! reads and failed requests roll back on drop.

use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::HeroRepo;
use crate::db::Session;
use crate::http::error::ApiError;
use crate::http::extractors::ValidWindow;
use crate::models::{Hero, HeroCreate};
use crate::state::AppState;

/// Delete acknowledgement
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub ok: bool,
}

/// POST /heroes/ - create a hero, id assigned by the store
async fn create_hero(
    mut session: Session,
    Json(input): Json<HeroCreate>,
) -> Result<Json<Hero>, ApiError> {
    let hero = HeroRepo::new(session.conn()).create(&input).await?;
    session.commit().await?;
    Ok(Json(hero))
}

/// GET /heroes/?offset=&limit= - list heroes
async fn list_heroes(
    mut session: Session,
    ValidWindow(window): ValidWindow,
) -> Result<Json<Vec<Hero>>, ApiError> {
    let heroes = HeroRepo::new(session.conn()).list(window).await?;
    Ok(Json(heroes))
}

/// GET /heroes/{hero_id}
async fn read_hero(
    mut session: Session,
    Path(hero_id): Path<i64>,
) -> Result<Json<Hero>, ApiError> {
    let hero = HeroRepo::new(session.conn()).get(hero_id).await?;
    Ok(Json(hero))
}

/// DELETE /heroes/{hero_id}
async fn delete_hero(
    mut session: Session,
    Path(hero_id): Path<i64>,
) -> Result<Json<Deleted>, ApiError> {
    HeroRepo::new(session.conn()).delete(hero_id).await?;
    session.commit().await?;
    Ok(Json(Deleted { ok: true }))
}

/// Hero routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/heroes/", get(list_heroes).post(create_hero))
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/{hero_id}", get(read_hero).delete(delete_hero))
}
