//! MovieService: the persistence capability behind the HTTP handlers.

mod movie;
pub use movie::{is_unique_violation, MovieService, PgMovieService, MOVIES_TABLE};
