//! # Forecast API
//!
//! HTTP surface for `forecast_core`:
//!
//! - `GET /forecast/prophet?product_id=..&days=..&current_stock=..`
//! - `GET /health`
//!
//! Every forecast request fits a fresh model on tokio's blocking pool; the
//! only shared state is the read-only forecaster behind an `Arc`.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod service;

pub use config::ServerConfig;
pub use errors::ApiError;
pub use service::ForecastService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub forecasts: Arc<dyn ForecastService>,
}

impl AppState {
    pub fn new<S: ForecastService + 'static>(service: S) -> Self {
        Self {
            forecasts: Arc::new(service),
        }
    }
}

/// Build the router with CORS open to the dashboard and request tracing
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/forecast/prophet", get(handlers::forecast_prophet))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
