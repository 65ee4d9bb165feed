//! Movie CRUD handlers: translate path and body into service calls, results into status codes.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{MoviePatch, NewMovie};
use crate::response::{created_id, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|e| AppError::BadRequest(format!("invalid id '{}': {}", id_str, e)))
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let movie = state.movies.get_movie(id).await?;
    Ok(ok(movie))
}

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = state.movies.get_all_movies().await?;
    Ok(ok(movies))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(movie): JsonBody<NewMovie>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.movies.create_movie(movie).await?;
    Ok(created_id(id))
}

/// PUT /movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(patch): JsonBody<MoviePatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.movies.update_movie(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.movies.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
