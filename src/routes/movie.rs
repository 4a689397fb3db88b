//! Movie routes, nested by the caller under [`MOVIES_PREFIX`].
//! Unmatched methods fall through to a handler so the 405 comes from its own method check.

use crate::handlers::movie::{create_movie, delete_movie, get_movie, list_movies, update_movie};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const MOVIES_PREFIX: &str = "/movies";

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_movies).post(create_movie).fallback(list_movies))
        .route(
            "/:id",
            get(get_movie).put(update_movie).delete(delete_movie).fallback(get_movie),
        )
        .with_state(state)
}
