//! Fourier series features for periodic demand patterns

use crate::{MathError, Result};

/// Days in a year, averaged over leap years
pub const YEARLY_PERIOD: f64 = 365.25;
/// Days in a week
pub const WEEKLY_PERIOD: f64 = 7.0;
/// One day, for intra-day cycles
pub const DAILY_PERIOD: f64 = 1.0;

/// A truncated Fourier series with a fixed period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierSeasonality {
    period: f64,
    order: usize,
}

impl FourierSeasonality {
    /// Create a new seasonal component with the given period (in days) and order
    pub fn new(period: f64, order: usize) -> Result<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(MathError::InvalidInput(
                "Seasonal period must be greater than zero".to_string(),
            ));
        }
        if order == 0 {
            return Err(MathError::InvalidInput(
                "Fourier order must be at least 1".to_string(),
            ));
        }

        Ok(Self { period, order })
    }

    /// Yearly cycle with order 10
    pub fn yearly() -> Self {
        Self {
            period: YEARLY_PERIOD,
            order: 10,
        }
    }

    /// Weekly cycle with order 3
    pub fn weekly() -> Self {
        Self {
            period: WEEKLY_PERIOD,
            order: 3,
        }
    }

    /// Daily cycle with order 4
    pub fn daily() -> Self {
        Self {
            period: DAILY_PERIOD,
            order: 4,
        }
    }

    /// Number of design columns produced by `features`
    pub fn width(&self) -> usize {
        2 * self.order
    }

    /// Period in days
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Fourier order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Sine/cosine pairs evaluated at `t` days since the epoch
    pub fn features(&self, t: f64) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.width());
        for k in 1..=self.order {
            let angle = 2.0 * std::f64::consts::PI * k as f64 * t / self.period;
            out.push(angle.sin());
            out.push(angle.cos());
        }
        out
    }
}
