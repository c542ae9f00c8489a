//! Demand forecast orchestration
//!
//! Loads a product's history, fits a fresh model on all of it, predicts the
//! history plus the requested horizon, and keeps only the horizon. The
//! horizon always starts on the caller's `today`, however stale the history
//! is; the model extrapolates across any gap.

use crate::data::{SalesStore, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::metrics::forecast_accuracy;
use crate::models::{ForecastModel, ForecastPoint, TrainedForecastModel};
use crate::report::ForecastReport;
use crate::utils::{prediction_frame, window_end};
use chrono::{Local, NaiveDate};
use demand_math::{inventory, UrgencyStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Shortest accepted horizon, in days
pub const MIN_HORIZON_DAYS: i64 = 1;
/// Longest accepted horizon, in days
pub const MAX_HORIZON_DAYS: i64 = 180;
/// Horizon used when the caller does not choose one
pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Parameters of a single forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub product_id: String,
    pub days: i64,
    pub current_stock: i64,
}

impl ForecastRequest {
    pub fn new(product_id: impl Into<String>, days: i64, current_stock: i64) -> Self {
        Self {
            product_id: product_id.into(),
            days,
            current_stock,
        }
    }

    /// Check horizon and stock bounds
    pub fn validate(&self) -> Result<()> {
        if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&self.days) {
            return Err(ForecastError::ValidationError(format!(
                "days must be between {} and {}, got {}",
                MIN_HORIZON_DAYS, MAX_HORIZON_DAYS, self.days
            )));
        }
        if self.current_stock < 0 {
            return Err(ForecastError::ValidationError(format!(
                "current_stock must be non-negative, got {}",
                self.current_stock
            )));
        }
        Ok(())
    }

    fn horizon(&self) -> usize {
        self.days as usize
    }
}

/// Aggregates derived from the forecast points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandSummary {
    pub average_sales: f64,
    pub total_sales: i64,
    pub reorder_point: i64,
}

impl DemandSummary {
    /// Mean, truncated total and buffered reorder point of the predictions
    pub fn from_points(points: &[ForecastPoint]) -> Result<Self> {
        let values: Vec<f64> = points.iter().map(|p| p.yhat).collect();
        let average_sales = demand_math::stats::mean(&values)?;
        let total_sales = values.iter().sum::<f64>().trunc() as i64;

        Ok(Self {
            average_sales,
            total_sales,
            reorder_point: inventory::reorder_point(average_sales),
        })
    }
}

/// Composes sales access and a forecasting model into reorder recommendations
#[derive(Debug, Clone)]
pub struct DemandForecaster<M: ForecastModel> {
    store: SalesStore,
    model: M,
}

impl<M: ForecastModel> DemandForecaster<M> {
    pub fn new(store: SalesStore, model: M) -> Self {
        Self { store, model }
    }

    pub fn store(&self) -> &SalesStore {
        &self.store
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Forecast starting on the local calendar date
    pub fn forecast_today(&self, request: &ForecastRequest) -> Result<ForecastReport> {
        self.forecast(request, Local::now().date_naive())
    }

    /// Forecast `request.days` days starting on `today`
    pub fn forecast(&self, request: &ForecastRequest, today: NaiveDate) -> Result<ForecastReport> {
        request.validate()?;

        let records = self.store.load_product(&request.product_id)?;
        let product_name = records[0].product.clone();
        let series = TimeSeries::from_records(&records);
        debug!(
            product_id = %request.product_id,
            rows = series.len(),
            "loaded sales history"
        );

        let trained = self.model.fit(&series)?;

        let horizon = request.horizon();
        let frame = prediction_frame(trained.history(), today, horizon)?;
        let mut predictions = trained.predict(&frame)?;
        if predictions.len() != frame.len() {
            return Err(ForecastError::ForecastingError(format!(
                "{} returned {} predictions for {} dates",
                trained.name(),
                predictions.len(),
                frame.len()
            )));
        }

        let forecast = predictions.split_off(predictions.len() - horizon);
        let fitted: Vec<f64> = predictions.iter().map(|p| p.yhat).collect();
        if let Ok(accuracy) = forecast_accuracy(&fitted, series.values()) {
            debug!(product_id = %request.product_id, %accuracy, "in-sample fit");
        }

        let summary = DemandSummary::from_points(&forecast)?;
        let status = UrgencyStatus::classify(request.current_stock, summary.reorder_point);

        info!(
            product_id = %request.product_id,
            model = trained.name(),
            days = request.days,
            reorder_point = summary.reorder_point,
            %status,
            "forecast complete"
        );

        Ok(ForecastReport {
            product_id: request.product_id.clone(),
            product_name,
            forecast,
            average_sales: summary.average_sales,
            total_sales: summary.total_sales,
            reorder_point: summary.reorder_point,
            start_date: today,
            end_date: window_end(today, horizon)?,
            status,
        })
    }
}
