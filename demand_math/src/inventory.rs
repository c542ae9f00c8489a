//! Reorder-point and stock urgency calculations

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied to mean projected daily demand (a 20% safety buffer)
pub const SAFETY_BUFFER: f64 = 1.2;

/// Whether current stock covers the reorder point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyStatus {
    /// Stock is below the reorder point; restock now
    Critical,
    /// Stock meets or exceeds the reorder point
    Safe,
}

impl UrgencyStatus {
    /// Classify stock against a reorder point. Equality counts as safe.
    pub fn classify(current_stock: i64, reorder_point: i64) -> Self {
        if current_stock < reorder_point {
            UrgencyStatus::Critical
        } else {
            UrgencyStatus::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyStatus::Critical => "critical",
            UrgencyStatus::Safe => "safe",
        }
    }
}

impl fmt::Display for UrgencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder point from mean projected daily demand: `floor(average × 1.2)`
pub fn reorder_point(average_daily_demand: f64) -> i64 {
    (average_daily_demand * SAFETY_BUFFER).floor() as i64
}

/// Classic lead-time reorder point: demand during lead time plus safety stock
pub fn reorder_point_with_lead_time(
    avg_daily_usage: f64,
    lead_time_days: f64,
    safety_stock: f64,
) -> Result<f64> {
    if avg_daily_usage < 0.0 || lead_time_days < 0.0 || safety_stock < 0.0 {
        return Err(MathError::InvalidInput(
            "Usage, lead time and safety stock must be non-negative".to_string(),
        ));
    }

    Ok(avg_daily_usage * lead_time_days + safety_stock)
}

/// Max-minus-average safety stock: `max_usage × max_lead − avg_usage × avg_lead`
pub fn safety_stock(
    max_daily_usage: f64,
    max_lead_time: f64,
    avg_daily_usage: f64,
    avg_lead_time: f64,
) -> Result<f64> {
    if max_daily_usage < avg_daily_usage || max_lead_time < avg_lead_time {
        return Err(MathError::InvalidInput(
            "Maximum usage and lead time must not be below their averages".to_string(),
        ));
    }

    Ok(max_daily_usage * max_lead_time - avg_daily_usage * avg_lead_time)
}
