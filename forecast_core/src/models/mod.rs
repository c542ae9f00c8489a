//! Forecasting models for daily demand series
//!
//! A model is fitted once per request and thrown away afterwards. The
//! orchestrator only depends on these traits, so any seasonal forecaster
//! that can fit a `TimeSeries` and predict arbitrary dates can be plugged in.

use crate::data::TimeSeries;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod seasonal;

pub use seasonal::{SeasonalRegression, TrainedSeasonalRegression};

/// Point estimate and uncertainty band for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub ds: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

/// Which periodic components a model should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalityConfig {
    pub daily: bool,
    pub weekly: bool,
    pub yearly: bool,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            daily: true,
            weekly: true,
            yearly: true,
        }
    }
}

/// Fitted model able to predict arbitrary dates
pub trait TrainedForecastModel: Debug {
    /// Predict one point per requested date, in the same order
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>>;

    /// Dates the model was fitted on
    fn history(&self) -> &[NaiveDate];

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be fitted on a daily series
pub trait ForecastModel: Debug + Clone {
    /// The type of fitted model produced
    type Trained: TrainedForecastModel;

    /// Fit the model on the whole series
    fn fit(&self, series: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
