//! Wire schema of a demand forecast

use crate::models::ForecastPoint;
use chrono::NaiveDate;
use demand_math::UrgencyStatus;
use serde::{Deserialize, Serialize};

/// Error text returned when a product has no sales history
pub const NOT_FOUND_MESSAGE: &str = "404: Product data not found";

/// Forecast for one product over the requested horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub product_id: String,
    pub product_name: String,
    pub forecast: Vec<ForecastPoint>,
    /// Mean predicted units per day
    pub average_sales: f64,
    /// Predicted units over the whole horizon, truncated
    pub total_sales: i64,
    pub reorder_point: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: UrgencyStatus,
}

/// Body carried by every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_MESSAGE)
    }
}

/// Either outcome of the forecast endpoint, as a client sees it
///
/// The error shape is tried first so a payload carrying an `error` field is
/// never mistaken for a report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForecastResponse {
    Failure(ErrorBody),
    Success(ForecastReport),
}
