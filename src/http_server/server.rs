//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::customer_routes::customer_routes;
use super::dashboard_routes::dashboard_routes;
use super::health_routes::health_routes;
use super::order_routes::order_routes;
use super::state::ApiState;
use crate::store::Store;

/// HTTP server for the dashboard API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server answering from `store`
    pub fn new(config: HttpServerConfig, store: Arc<dyn Store>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn Store>) -> Router {
        let state = Arc::new(ApiState::new(store));

        let api = Router::new()
            .merge(dashboard_routes(state.clone()))
            .merge(customer_routes(state.clone()))
            .merge(order_routes(state));

        Router::new()
            // Liveness at `/`, `/api` and `/health`
            .merge(health_routes())
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind (host may be a name or an IP) and serve until SIGINT/SIGTERM
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        tracing::info!(address = %listener.local_addr()?, "Service Dashboard API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// CORS policy: credentials allowed, methods and headers mirrored.
///
/// A wildcard origin is served by echoing the caller's origin, since
/// browsers refuse `*` together with credentials.
fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %s, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), Arc::new(MemoryStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::new(config, Arc::new(MemoryStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_wildcard_origin() {
        let config = HttpServerConfig {
            cors_origins: vec!["*".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, Arc::new(MemoryStore::new())).router();
    }
}
