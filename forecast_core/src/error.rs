//! Error types for the forecast_core crate

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the forecast_core crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// No historical sales exist for the requested product
    #[error("Product data not found: {0}")]
    NotFound(String),

    /// Request parameters outside their accepted bounds
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The combined sales file needed by an offline step is absent
    #[error("{} not found. Generate sales data first.", .0.display())]
    MissingSource(PathBuf),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to model fitting or prediction
    #[error("Forecasting error: {0}")]
    ForecastingError(String),

    /// Error from the numeric kernels
    #[error("Math error: {0}")]
    MathError(#[from] demand_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while reading or writing CSV records
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

impl ForecastError {
    /// Whether this error means the product has no usable history
    pub fn is_not_found(&self) -> bool {
        matches!(self, ForecastError::NotFound(_))
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}
