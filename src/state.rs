//! Shared application state for the movie routes.

use crate::service::MovieService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL in production; handler tests plug in a double.
    pub movies: Arc<dyn MovieService>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieService>) -> Self {
        AppState { movies }
    }
}
