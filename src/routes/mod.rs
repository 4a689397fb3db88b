//! Route tables and the assembled application router.

mod common;
mod movie;

pub use common::{common_routes, common_routes_with_ready};
pub use movie::{movie_routes, MOVIES_PREFIX};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, movies under [`MOVIES_PREFIX`].
pub fn app(state: AppState, pool: PgPool, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(pool))
        .nest(MOVIES_PREFIX, movie_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
