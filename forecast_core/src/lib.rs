//! # Forecast Core
//!
//! Daily demand forecasting for individual products, with reorder
//! recommendations derived from the projected demand.
//!
//! ## Features
//!
//! - Historical sales access from per-product or combined CSV stores
//! - A seasonal regression model (trend + daily/weekly/yearly Fourier terms)
//!   behind the `ForecastModel` trait, refitted on every request
//! - Reorder point (mean projected demand plus a 20% buffer) and a
//!   critical/safe urgency status
//! - Offline generation of the product metadata table
//!
//! ## Quick Start
//!
//! ```no_run
//! use forecast_core::{DemandForecaster, ForecastRequest, SalesStore, SeasonalRegression};
//!
//! let store = SalesStore::from_data_dir("data/processed");
//! let forecaster = DemandForecaster::new(store, SeasonalRegression::default());
//!
//! let report = forecaster.forecast_today(&ForecastRequest::new("BB0001", 30, 120))?;
//! println!("{}: reorder at {} units ({})", report.product_name, report.reorder_point, report.status);
//! # Ok::<(), forecast_core::ForecastError>(())
//! ```

pub mod data;
pub mod error;
pub mod forecast;
pub mod metadata;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{SalesRecord, SalesStore, TimeSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{DemandForecaster, ForecastRequest};
pub use crate::metadata::{generate_metadata, load_metadata, ProductMetadata};
pub use crate::models::{
    ForecastModel, ForecastPoint, SeasonalRegression, SeasonalityConfig, TrainedForecastModel,
};
pub use crate::report::{ErrorBody, ForecastReport, ForecastResponse, NOT_FOUND_MESSAGE};
pub use demand_math::UrgencyStatus;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
