//! # Demand Math
//!
//! Mathematical building blocks for demand forecasting and inventory planning.
//! This crate has no I/O; every function works on plain slices so that the
//! forecasting engine and the service layer can share the same arithmetic.

use thiserror::Error;

pub mod inventory;
pub mod regression;
pub mod seasonality;
pub mod stats;

pub use inventory::{reorder_point, UrgencyStatus, SAFETY_BUFFER};
pub use regression::RidgeRegression;
pub use seasonality::FourierSeasonality;

/// Errors that can occur in demand calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for demand math operations
pub type Result<T> = std::result::Result<T, MathError>;
