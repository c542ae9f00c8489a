//! Accuracy of fitted values against the observed history

use crate::error::{ForecastError, Result};
use std::fmt;

/// Forecast accuracy metrics
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error over non-zero actuals
    pub mape: f64,
}

/// Compare fitted values against actual observations
pub fn forecast_accuracy(fitted: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if fitted.len() != actual.len() || fitted.is_empty() {
        return Err(ForecastError::ValidationError(
            "Fitted and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = fitted.len() as f64;
    let errors: Vec<f64> = fitted.iter().zip(actual).map(|(f, a)| a - f).collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let rmse = (errors.iter().map(|e| e * e).sum::<f64>() / n).sqrt();

    // Zero-demand days carry no percentage error.
    let (pct_sum, pct_count) = actual
        .iter()
        .zip(&errors)
        .filter(|(a, _)| **a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (a, e)| {
            (sum + e.abs() / a.abs() * 100.0, count + 1)
        });
    let mape = if pct_count > 0 {
        pct_sum / pct_count as f64
    } else {
        0.0
    };

    Ok(ForecastAccuracy { mae, rmse, mape })
}

impl fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAE {:.3}, RMSE {:.3}, MAPE {:.2}%",
            self.mae, self.rmse, self.mape
        )
    }
}
