//! Stateless HTTP service
//!
//! Shares one validated reference data set across handlers; every request is
//! evaluated independently.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::metrics::Evaluator;
use crate::AppError;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
}

/// Build the router with all routes and middleware
pub fn router(evaluator: Evaluator) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/presets", get(handlers::presets))
        .route("/evaluate", post(handlers::evaluate))
        .route("/scenarios", post(handlers::scenarios))
        .route("/sweep", post(handlers::sweep_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { evaluator })
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &ServerConfig, evaluator: Evaluator) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    tracing::info!(
        "Starting server on {addr} with reference data {}",
        evaluator.reference().version
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(evaluator)).await?;
    Ok(())
}
