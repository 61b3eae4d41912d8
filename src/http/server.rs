//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (timeout, request ID, tracing, panic recovery)
//! - Serve connections and drain them on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Settings;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub upstream: UpstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    settings: Arc<Settings>,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Arc<Settings>) -> Self {
        let state = AppState {
            settings: settings.clone(),
            upstream: UpstreamClient::new(),
        };

        let router = Self::build_router(&settings, state);
        Self { router, settings }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(settings: &Settings, state: AppState) -> Router {
        Router::new()
            .route("/home", get(handlers::landing))
            .route("/movie", get(handlers::search_movies))
            .route("/movie/{id}", get(handlers::movie_by_id))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                settings.timeouts.write_secs,
            )))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get the router, for driving the server in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
