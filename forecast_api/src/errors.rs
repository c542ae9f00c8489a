use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forecast_core::{ErrorBody, ForecastError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Forecast(ForecastError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, ErrorBody::not_found())
            }
            ApiError::Forecast(ForecastError::ValidationError(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::new(msg.clone()))
            }
            ApiError::Forecast(other) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(other.to_string()),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg.clone())),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(format!("Internal server error: {}", msg)),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}
