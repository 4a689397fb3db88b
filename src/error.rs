//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures of the persistence layer.
#[derive(Error, Debug)]
pub enum MovieError {
    #[error("database: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("no record by [ID: {id}] was found in the database")]
    NotFound { id: i64 },
    #[error("undecodable movie row: {0}")]
    CorruptRow(#[source] sqlx::Error),
    #[error("a record by [ID: {id}] already exists in the database")]
    AlreadyExists { id: i64 },
    #[error("a record by [ID: {id}] does not exist in the database")]
    NotExists { id: i64 },
}

/// Errors surfaced at the HTTP boundary. Every service failure collapses into a 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{method} method to {operation}")]
    MethodNotAllowed {
        method: Method,
        operation: &'static str,
    },
    #[error("{message}: {detail}")]
    BadRequest {
        message: &'static str,
        detail: String,
    },
    /// The body could not be read (e.g. over the size limit); keeps the rejection's status.
    #[error("unreadable body: {0}")]
    Body(#[from] BytesRejection),
    #[error(transparent)]
    Service(#[from] MovieError),
}

impl AppError {
    pub fn bad_request(message: &'static str, detail: impl Into<String>) -> Self {
        AppError::BadRequest {
            message,
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MethodNotAllowed { .. } => {
                tracing::warn!("[405 - Method Not Allowed] {}", self);
                (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", "Method not allowed")
            }
            AppError::BadRequest { message, detail } => {
                tracing::warn!("[400 - Bad Request] {}", detail);
                (StatusCode::BAD_REQUEST, "bad_request", *message)
            }
            AppError::Body(rejection) => {
                let status = rejection.status();
                tracing::warn!("[{} - Unreadable Body] {}", status.as_u16(), rejection.body_text());
                (status, "unreadable_body", "Invalid request body")
            }
            AppError::Service(e) => {
                tracing::error!("[500 - Internal Server Error] {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "Service unreachable")
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_all_become_500() {
        let errors = [
            MovieError::NotFound { id: 1 },
            MovieError::AlreadyExists { id: 1 },
            MovieError::NotExists { id: 1 },
            MovieError::Storage(sqlx::Error::PoolTimedOut),
            MovieError::CorruptRow(sqlx::Error::ColumnNotFound("name".into())),
        ];
        for e in errors {
            let res = AppError::from(e).into_response();
            assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn boundary_errors_keep_their_status() {
        let res = AppError::MethodNotAllowed {
            method: Method::PATCH,
            operation: "create_movie",
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

        let res = AppError::bad_request("Invalid ID", "invalid digit found in string").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_name_the_record() {
        assert_eq!(
            MovieError::AlreadyExists { id: 3 }.to_string(),
            "a record by [ID: 3] already exists in the database"
        );
        assert_eq!(
            MovieError::NotExists { id: 4 }.to_string(),
            "a record by [ID: 4] does not exist in the database"
        );
        let e = AppError::MethodNotAllowed {
            method: Method::GET,
            operation: "create_movie",
        };
        assert_eq!(e.to_string(), "GET method to create_movie");
    }
}
