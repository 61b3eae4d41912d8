//! Movie Gateway binary entry point.
//!
//! Startup order: configuration, logging, listener, server. Any failure
//! before the listener is bound is fatal. Shutdown is signal-driven with
//! a bounded drain.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use movie_gateway::config::Settings;
use movie_gateway::http::HttpServer;
use movie_gateway::lifecycle::{signals, Shutdown};
use movie_gateway::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => Arc::new(settings),
        Err(error) => {
            eprintln!("configuration error: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = logging::init(&settings.observability) {
        eprintln!("logging setup failed: {error}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        bind_address = %settings.listener.bind_address,
        upstream = %settings.upstream.base_url,
        read_timeout_secs = settings.timeouts.read_secs,
        write_timeout_secs = settings.timeouts.write_secs,
        "Configuration loaded"
    );

    let listener = match TcpListener::bind(&settings.listener.bind_address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(error = %error, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server = HttpServer::new(settings.clone());
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        _ = signals::wait_for_shutdown() => {
            tracing::info!("Shutting down server");
            shutdown.trigger();

            let drain = Duration::from_secs(settings.timeouts.drain_secs);
            match tokio::time::timeout(drain, &mut server_task).await {
                Ok(Ok(Ok(()))) => tracing::info!("Server exiting"),
                Ok(Ok(Err(error))) => {
                    tracing::error!(error = %error, "Server error during drain");
                    return ExitCode::FAILURE;
                }
                Ok(Err(error)) => {
                    tracing::error!(error = %error, "Server task failed");
                    return ExitCode::FAILURE;
                }
                Err(_) => {
                    tracing::warn!("Server forced to shutdown: drain deadline exceeded");
                    server_task.abort();
                }
            }
        }
        result = &mut server_task => {
            // The server stopped without a signal: surface the error.
            match result {
                Ok(Ok(())) => tracing::info!("Server exiting"),
                Ok(Err(error)) => {
                    tracing::error!(error = %error, "Server error");
                    return ExitCode::FAILURE;
                }
                Err(error) => {
                    tracing::error!(error = %error, "Server task failed");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
