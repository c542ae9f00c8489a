use crate::{errors::ApiError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use forecast_core::forecast::DEFAULT_HORIZON_DAYS;
use forecast_core::{ForecastReport, ForecastRequest};
use serde::Deserialize;
use tracing::info;

/// Query string of `GET /forecast/prophet`
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub product_id: String,
    #[serde(default = "default_days")]
    pub days: i64,
    #[serde(default)]
    pub current_stock: i64,
}

fn default_days() -> i64 {
    DEFAULT_HORIZON_DAYS
}

impl From<ForecastQuery> for ForecastRequest {
    fn from(query: ForecastQuery) -> Self {
        ForecastRequest::new(query.product_id, query.days, query.current_stock)
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "forecast-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Forecast demand for one product and classify its stock
pub async fn forecast_prophet(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ForecastReport>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = ForecastRequest::from(query);

    // Bounds are checked here so invalid requests never reach the worker pool.
    request.validate()?;

    info!(
        product_id = %request.product_id,
        days = request.days,
        current_stock = request.current_stock,
        "forecast requested"
    );

    let service = state.forecasts.clone();
    let report = tokio::task::spawn_blocking(move || service.forecast(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("forecast task failed: {}", e)))??;

    Ok(Json(report))
}
