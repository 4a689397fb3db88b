//! Movie CRUD against PostgreSQL.

use crate::error::MovieError;
use crate::model::Movie;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

pub const MOVIES_TABLE: &str = "movies";

const SELECT_ALL: &str = "SELECT id, name FROM movies";
const SELECT_ONE: &str = "SELECT id, name FROM movies WHERE id = $1";
const INSERT: &str = "INSERT INTO movies (id, name) VALUES ($1, $2)";
const UPDATE: &str = "UPDATE movies SET name = $1 WHERE id = $2";
const DELETE: &str = "DELETE FROM movies WHERE id = $1";

/// Operations on the movie table. Handlers only see this trait, so tests can swap the backend.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// All rows in storage order. An empty table is not an error.
    async fn list(&self) -> Result<Vec<Movie>, MovieError>;

    async fn get(&self, id: i64) -> Result<Movie, MovieError>;

    /// Insert with the caller's id; fails with `AlreadyExists` if the id is taken.
    async fn create(&self, movie: &Movie) -> Result<(), MovieError>;

    /// Rename the row at `id`; fails with `NotExists` if there is none. `movie.id` is ignored.
    async fn update(&self, id: i64, movie: &Movie) -> Result<(), MovieError>;

    /// Unconditional delete. Missing ids succeed.
    async fn delete(&self, id: i64) -> Result<(), MovieError>;
}

pub struct PgMovieService {
    pool: PgPool,
}

impl PgMovieService {
    pub fn new(pool: PgPool) -> Self {
        PgMovieService { pool }
    }
}

fn decode(row: &PgRow) -> Result<Movie, MovieError> {
    Movie::from_row(row).map_err(MovieError::CorruptRow)
}

/// True when PostgreSQL rejected a write for breaking a unique or primary key constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// A failed insert: a key collision is `AlreadyExists`, anything else is storage.
fn insert_error(id: i64, err: sqlx::Error) -> MovieError {
    if is_unique_violation(&err) {
        MovieError::AlreadyExists { id }
    } else {
        MovieError::Storage(err)
    }
}

#[async_trait]
impl MovieService for PgMovieService {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        rows.iter().map(decode).collect()
    }

    async fn get(&self, id: i64) -> Result<Movie, MovieError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        let row = sqlx::query(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MovieError::NotFound { id })?;
        decode(&row)
    }

    async fn create(&self, movie: &Movie) -> Result<(), MovieError> {
        if self.get(movie.id).await.is_ok() {
            return Err(MovieError::AlreadyExists { id: movie.id });
        }

        tracing::debug!(sql = %INSERT, id = movie.id, name = %movie.name, "execute");
        // A concurrent create can slip past the check above; the primary key catches it.
        sqlx::query(INSERT)
            .bind(movie.id)
            .bind(&movie.name)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(movie.id, e))?;
        Ok(())
    }

    async fn update(&self, id: i64, movie: &Movie) -> Result<(), MovieError> {
        match self.get(id).await {
            Ok(_) => {}
            Err(MovieError::NotFound { .. }) => return Err(MovieError::NotExists { id }),
            Err(e) => return Err(e),
        }

        tracing::debug!(sql = %UPDATE, id, name = %movie.name, "execute");
        let result = sqlx::query(UPDATE)
            .bind(&movie.name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(MovieError::NotExists { id });
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), MovieError> {
        tracing::debug!(sql = %DELETE, id, "execute");
        sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
