//! HTTP entry point.
//!
//! Serves `POST /evaluate`, `POST /grade` and `GET /health` on an axum
//! router. The evaluator is shared across requests behind an `Arc`.

mod config;
mod handlers;
mod types;

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::error::EvalError;
use crate::evaluator::{Evaluator, FixedScoreEvaluator};

pub use config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use types::HealthResponse;

/// HTTP server exposing the evaluation handlers.
pub struct Server {
    config: ServerConfig,
    evaluator: Arc<dyn Evaluator>,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub evaluator: Arc<dyn Evaluator>,
}

impl Server {
    /// Creates a server that answers with the placeholder scores.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            evaluator: Arc::new(FixedScoreEvaluator),
        }
    }

    /// Replaces the evaluator used to score requests.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Builds the router without binding a socket.
    pub fn router(&self) -> Router {
        router(self.evaluator.clone(), self.config.cors)
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> Result<(), EvalError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| EvalError::Server(format!("failed to bind {addr}: {e}")))?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), EvalError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            log::info!(
                "Listening on http://{addr} (evaluator: {})",
                self.evaluator.name()
            );
        }
        if self.config.debug {
            log::warn!("Debug mode is enabled; do not use this configuration in production");
        }
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| EvalError::Server(e.to_string()))
    }
}

/// Builds the evaluation router around an evaluator.
pub fn router(evaluator: Arc<dyn Evaluator>, cors: bool) -> Router {
    let app = Router::new()
        .route("/evaluate", post(handlers::handle_evaluate))
        .route("/grade", post(handlers::handle_grade))
        .route("/health", get(handlers::handle_health))
        .with_state(ServerState { evaluator });
    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
