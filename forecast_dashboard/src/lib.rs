//! # Forecast Dashboard
//!
//! Client side of the demand forecasting service: picks a product from the
//! metadata table, fetches its forecast, renders an SVG chart and prints a
//! reorder summary.

pub mod chart;
pub mod client;
pub mod error;
pub mod selection;
pub mod summary;

pub use chart::render_chart;
pub use client::{ForecastClient, DEFAULT_API_URL};
pub use error::{DashboardError, Result};
pub use selection::{extract_product_id, load_products, product_labels};
pub use summary::{format_summary, urgency_banner};
