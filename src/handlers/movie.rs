//! Movie handlers: list, get, create, update, delete.
//! Each handler checks its own method so the router can hand unmatched methods to it for a 405.
//! Bodies are taken as `Result<Bytes, _>` so the method and id checks still run first.

use crate::error::AppError;
use crate::model::Movie;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

const SUCCESS: &str = "success";

fn ensure_method(method: &Method, allowed: Method, operation: &'static str) -> Result<(), AppError> {
    if *method != allowed {
        return Err(AppError::MethodNotAllowed {
            method: method.clone(),
            operation,
        });
    }
    Ok(())
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|e| AppError::bad_request("Invalid ID", format!("id '{}': {}", id_str, e)))
}

/// Decode the body as a movie and run the validator. The client only ever sees "Invalid request body".
fn parse_valid_movie(body: &[u8]) -> Result<Movie, AppError> {
    let movie: Movie =
        serde_json::from_slice(body).map_err(|e| AppError::bad_request("Invalid request body", e.to_string()))?;
    movie
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request body", format!("invalid movie object: {}", e)))?;
    Ok(movie)
}

pub async fn list_movies(method: Method, State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    ensure_method(&method, Method::GET, "list_movies")?;
    let movies = state.movies.list().await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    method: Method,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Movie>, AppError> {
    ensure_method(&method, Method::GET, "get_movie")?;
    let id = parse_id(&id_str)?;
    let movie = state.movies.get(id).await?;
    Ok(Json(movie))
}

pub async fn create_movie(
    method: Method,
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    ensure_method(&method, Method::POST, "create_movie")?;
    let movie = parse_valid_movie(&body?)?;
    state.movies.create(&movie).await?;
    tracing::info!(id = movie.id, "movie created");
    Ok((StatusCode::CREATED, SUCCESS))
}

pub async fn update_movie(
    method: Method,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    ensure_method(&method, Method::PUT, "update_movie")?;
    let id = parse_id(&id_str)?;
    let movie = parse_valid_movie(&body?)?;
    state.movies.update(id, &movie).await?;
    tracing::info!(id, "movie updated");
    Ok((StatusCode::OK, SUCCESS))
}

/// 204 carries no body on the wire; the literal is dropped by the HTTP layer.
pub async fn delete_movie(
    method: Method,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ensure_method(&method, Method::DELETE, "delete_movie")?;
    let id = parse_id(&id_str)?;
    state.movies.delete(id).await?;
    tracing::info!(id, "movie deleted");
    Ok((StatusCode::NO_CONTENT, SUCCESS))
}
