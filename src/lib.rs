//! # Demand Forecast
//!
//! Inventory demand forecasting, split into four crates:
//!
//! - [`demand_math`]: regression, Fourier seasonality and reorder arithmetic
//! - [`forecast_core`]: sales history access, model fitting and forecast reports
//! - [`forecast_api`]: the HTTP service
//! - [`forecast_dashboard`]: the chart and summary client
//!
//! ## Example
//!
//! ```
//! use demand_forecast_workspace::demand_math::{reorder_point, UrgencyStatus};
//!
//! let rop = reorder_point(10.5);
//! assert_eq!(rop, 12);
//! assert_eq!(UrgencyStatus::classify(11, rop), UrgencyStatus::Critical);
//! ```

pub use demand_math;
pub use forecast_api;
pub use forecast_core;
pub use forecast_dashboard;
