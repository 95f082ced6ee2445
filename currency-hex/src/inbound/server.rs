//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use currency_types::ExchangeRepository;

use super::handlers::{self, AppState};
use crate::ExchangeService;

/// HTTP Server for the Currency Exchange API.
pub struct HttpServer<R: ExchangeRepository> {
    state: Arc<AppState<R>>,
}

impl<R: ExchangeRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ExchangeService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route(
                "/currencies",
                get(handlers::list_currencies::<R>).post(handlers::create_currency::<R>),
            )
            .route("/currency/{code}", get(handlers::get_currency::<R>))
            .route(
                "/exchangeRates",
                get(handlers::list_exchange_rates::<R>)
                    .post(handlers::create_exchange_rate::<R>),
            )
            .route(
                "/exchangeRate/{pair}",
                get(handlers::get_exchange_rate::<R>)
                    .patch(handlers::update_exchange_rate::<R>),
            )
            .route("/exchange", get(handlers::convert::<R>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
