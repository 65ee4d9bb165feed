//! Movie CRUD routes.

use crate::handlers::movie::{create_movie, delete_movie, get_movie, list_movies, update_movie};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Largest accepted request body. Enforced by `JsonBody`, so oversized bodies get a JSON 413.
pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
