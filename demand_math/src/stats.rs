//! Descriptive statistics over slices of observations

use crate::{MathError, Result};

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of the values
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    Ok(variance.sqrt())
}

/// Root mean square of residuals, corrected for the number of fitted parameters
pub fn residual_std_error(residuals: &[f64], parameters: usize) -> Result<f64> {
    if residuals.is_empty() {
        return Err(MathError::InsufficientData(
            "No residuals to summarise".to_string(),
        ));
    }

    // Fall back to the plain mean square when the model is saturated.
    let dof = if residuals.len() > parameters {
        residuals.len() - parameters
    } else {
        residuals.len()
    };

    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    Ok((sse / dof as f64).sqrt())
}

/// Largest absolute value in the series, or 1.0 for an all-zero series
pub fn max_abs_scale(values: &[f64]) -> f64 {
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale > 0.0 {
        scale
    } else {
        1.0
    }
}
