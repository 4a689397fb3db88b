//! In-memory stand-in for the PostgreSQL service, with the same existence rules.

#![allow(dead_code)]

use async_trait::async_trait;
use movie_service::{Movie, MovieError, MovieService};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryMovies {
    rows: Mutex<Vec<Movie>>,
    unreachable: bool,
}

impl InMemoryMovies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Movie>) -> Self {
        InMemoryMovies {
            rows: Mutex::new(rows),
            unreachable: false,
        }
    }

    /// Every call fails as if the database were down.
    pub fn unreachable() -> Self {
        InMemoryMovies {
            rows: Mutex::new(Vec::new()),
            unreachable: true,
        }
    }

    pub fn snapshot(&self) -> Vec<Movie> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), MovieError> {
        if self.unreachable {
            return Err(MovieError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl MovieService for InMemoryMovies {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn get(&self, id: i64) -> Result<Movie, MovieError> {
        self.check()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(MovieError::NotFound { id })
    }

    async fn create(&self, movie: &Movie) -> Result<(), MovieError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|m| m.id == movie.id) {
            return Err(MovieError::AlreadyExists { id: movie.id });
        }
        rows.push(movie.clone());
        Ok(())
    }

    async fn update(&self, id: i64, movie: &Movie) -> Result<(), MovieError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MovieError::NotExists { id })?;
        row.name = movie.name.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), MovieError> {
        self.check()?;
        self.rows.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}
