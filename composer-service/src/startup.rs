//! Application startup and lifecycle management.
//!
//! Builds the HTTP router, wires the text provider into shared state, and
//! runs the server until a shutdown signal arrives.

use crate::config::ComposerConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ComposerConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the API router with all routes and middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(handlers::api_status))
        .route("/api/generate-email", post(handlers::generate_email))
        .route("/api/paraphrase", post(handlers::paraphrase_text))
        .route("/api/analyze-and-reply", post(handlers::analyze_and_reply))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ComposerConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> =
            if config.gemini.enabled && !config.gemini.api_key.is_empty() {
                tracing::info!(
                    model = %config.models.text_model,
                    "Initialized Gemini text provider"
                );
                Arc::new(GeminiTextProvider::new(GeminiConfig {
                    api_key: config.gemini.api_key.clone(),
                    model: config.models.text_model.clone(),
                }))
            } else {
                tracing::info!("Gemini provider disabled or unconfigured, using mock text provider");
                Arc::new(MockTextProvider::new(true))
            };

        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Composer service listening on port {}", port);

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

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = api_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
