//! Movie service: CRUD REST backend for a single `movies` table in PostgreSQL.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::Config;
pub use error::{AppError, ConfigError, MovieError};
pub use model::{Movie, ValidationError};
pub use state::AppState;
pub use store::{connect, ensure_movies_table};
pub use routes::{app, common_routes, common_routes_with_ready, movie_routes, MOVIES_PREFIX};
pub use service::{MovieService, PgMovieService};
