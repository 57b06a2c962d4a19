//! Server registry API.
//!
//! Tracks inventory records for servers with a RUNNING/STOPPED lifecycle flag and exposes
//! them over a JSON HTTP API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, boundary validation, DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Domain Layer** (`domain/`) - Domain models and operation parameters
//! - **Model Layer** (`model/`) - Request/response DTOs and OpenAPI schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules: `config` (environment configuration), `state` (shared state),
//! `startup` (tracing, database, seeding) and `router` (routes and API documentation).

mod config;
mod controller;
mod data;
mod domain;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tower_http::trace::TraceLayer;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_demo_data {
        startup::seed_servers(&db).await?;
    }

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
