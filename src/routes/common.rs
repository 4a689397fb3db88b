//! Operational routes: liveness, database readiness, build version.

use crate::store::ping;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

/// 200 while the pool can run `SELECT 1`, 503 `degraded` otherwise.
async fn ready(State(pool): State<PgPool>) -> (StatusCode, Json<StatusBody>) {
    match ping(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusBody {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health and GET /version; no database access.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// Common routes plus GET /ready, which pings the database.
pub fn common_routes_with_ready(pool: PgPool) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(pool)
        .merge(common_routes())
}
