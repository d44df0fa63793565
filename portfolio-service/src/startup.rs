//! Application startup and lifecycle management.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::PortfolioConfig;
use crate::handlers::{database_diagnostics, hello, list_projects, read_root, submit_contact};
use crate::services::PortfolioDb;
use service_core::error::AppError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: PortfolioDb,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/test", get(database_diagnostics))
        .route("/api/projects", get(list_projects))
        .route("/api/contact", post(submit_contact))
        // Wildcard origins cannot be combined with credentials in tower-http
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// The MongoDB client connects lazily; an unreachable store surfaces
    /// per-request rather than at startup.
    pub async fn build(config: PortfolioConfig) -> Result<Self, AppError> {
        let db = PortfolioDb::connect(&config.mongodb.uri, &config.mongodb.database).await?;

        let state = AppState { db };

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Portfolio backend listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &PortfolioDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
