//! Server entry point: load config, connect, ensure the table, serve until Ctrl-C.

use movie_service::{app, connect, ensure_movies_table, AppState, Config, PgMovieService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    ensure_movies_table(&pool).await?;

    let state = AppState::new(Arc::new(PgMovieService::new(pool.clone())));
    let router = app(state, pool.clone(), config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database connections closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
