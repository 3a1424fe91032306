//! HTTP server for the dashboard API

use super::handler::{
    correlations_handler, org_handler, search_handler, status_handler, summary_handler,
    SharedContext,
};
use crate::config::ServerConfig;
use crate::context::DashboardContext;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the API router over a shared context
pub fn router(context: SharedContext) -> Router {
    Router::new()
        .route("/api/summary", get(summary_handler))
        .route("/api/org", get(org_handler))
        .route("/api/correlations", get(correlations_handler))
        .route("/api/search", get(search_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(context)
}

/// HTTP server serving one read-only dashboard context
pub struct HttpServer {
    context: SharedContext,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(context: DashboardContext, config: ServerConfig) -> Self {
        Self {
            context: Arc::new(context),
            config,
        }
    }

    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Start the HTTP server; returns after Ctrl+C
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(Arc::clone(&self.context));

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard API listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Dashboard API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
