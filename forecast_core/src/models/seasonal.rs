//! Additive trend + Fourier seasonality regression
//!
//! `y(t) = a + b·t̃ + Σ seasonal_k(t)` where `t̃` is time rescaled to `[0, 1]`
//! over the fitted history and each seasonal component is a truncated Fourier
//! series in days since the Unix epoch. Coefficients are fitted by ridge
//! regression on the max-abs scaled target so the penalty is unit-free.
//!
//! A component whose period is longer than the fitted history cannot be told
//! apart from the trend. Its coefficients carry a much heavier penalty, so on
//! short histories yearly terms stay near zero instead of swinging
//! out of range just past the last observation.

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastPoint, SeasonalityConfig, TrainedForecastModel};
use chrono::{Datelike, NaiveDate};
use demand_math::regression::RidgeRegression;
use demand_math::seasonality::FourierSeasonality;
use demand_math::stats;
use statrs::distribution::{ContinuousCDF, Normal};

const DEFAULT_INTERVAL_WIDTH: f64 = 0.8;
const DEFAULT_RIDGE_PENALTY: f64 = 1.0;
/// Penalty multiplier for components whose period exceeds the history span
const UNRESOLVED_PERIOD_WEIGHT: f64 = 1e4;

/// Seasonal regression model
#[derive(Debug, Clone)]
pub struct SeasonalRegression {
    /// Name of the model
    name: String,
    seasonality: SeasonalityConfig,
    /// Coverage of the uncertainty band, in (0, 1)
    interval_width: f64,
    ridge_penalty: f64,
}

/// Fitted seasonal regression
#[derive(Debug, Clone)]
pub struct TrainedSeasonalRegression {
    name: String,
    components: Vec<FourierSeasonality>,
    regression: RidgeRegression,
    history: Vec<NaiveDate>,
    t_start: f64,
    t_span: f64,
    /// Day number of the last fitted observation
    t_end: f64,
    y_scale: f64,
    /// Residual standard error in original units
    sigma: f64,
    /// Normal quantile for the configured interval width
    z: f64,
}

impl SeasonalRegression {
    /// Create a new seasonal regression with an 80% uncertainty band
    pub fn new(seasonality: SeasonalityConfig) -> Self {
        Self {
            name: describe(&seasonality),
            seasonality,
            interval_width: DEFAULT_INTERVAL_WIDTH,
            ridge_penalty: DEFAULT_RIDGE_PENALTY,
        }
    }

    /// Set the coverage of the uncertainty band
    pub fn with_interval_width(mut self, interval_width: f64) -> Result<Self> {
        if !(interval_width > 0.0 && interval_width < 1.0) {
            return Err(ForecastError::ValidationError(
                "Interval width must be between 0 and 1".to_string(),
            ));
        }
        self.interval_width = interval_width;
        Ok(self)
    }

    /// Set the ridge penalty applied to trend and seasonal coefficients
    pub fn with_ridge_penalty(mut self, penalty: f64) -> Result<Self> {
        RidgeRegression::new(penalty)?;
        self.ridge_penalty = penalty;
        Ok(self)
    }

    pub fn seasonality(&self) -> SeasonalityConfig {
        self.seasonality
    }

    pub fn interval_width(&self) -> f64 {
        self.interval_width
    }

    fn components(&self) -> Vec<FourierSeasonality> {
        let mut components = Vec::new();
        if self.seasonality.yearly {
            components.push(FourierSeasonality::yearly());
        }
        if self.seasonality.weekly {
            components.push(FourierSeasonality::weekly());
        }
        if self.seasonality.daily {
            components.push(FourierSeasonality::daily());
        }
        components
    }
}

impl Default for SeasonalRegression {
    fn default() -> Self {
        Self::new(SeasonalityConfig::default())
    }
}

impl ForecastModel for SeasonalRegression {
    type Trained = TrainedSeasonalRegression;

    fn fit(&self, series: &TimeSeries) -> Result<Self::Trained> {
        if series.len() < 2 {
            return Err(ForecastError::ForecastingError(
                "Need at least 2 observations to fit a seasonal model".to_string(),
            ));
        }

        let history = series.dates().to_vec();
        let times: Vec<f64> = history.iter().map(|&d| epoch_days(d)).collect();
        let t_start = times.iter().copied().fold(f64::INFINITY, f64::min);
        let t_end = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let t_span = (t_end - t_start).max(1.0);

        let y_scale = stats::max_abs_scale(series.values());
        let targets: Vec<f64> = series.values().iter().map(|y| y / y_scale).collect();

        let components = self.components();
        let rows: Vec<Vec<f64>> = history
            .iter()
            .map(|&d| design_row(&components, d, t_start, t_span))
            .collect();

        let mut regression = RidgeRegression::new(self.ridge_penalty)?
            .with_penalty_weights(penalty_weights(&components, t_span))?;
        regression.fit(&rows, &targets)?;

        let mut residuals = Vec::with_capacity(rows.len());
        for (row, &y) in rows.iter().zip(series.values()) {
            residuals.push(y - regression.predict(row)? * y_scale);
        }
        let sigma = stats::residual_std_error(&residuals, rows[0].len())?;

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForecastError::ForecastingError(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + self.interval_width / 2.0);

        Ok(TrainedSeasonalRegression {
            name: self.name.clone(),
            components,
            regression,
            history,
            t_start,
            t_span,
            t_end,
            y_scale,
            sigma,
            z,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedSeasonalRegression {
    /// Residual standard error of the in-sample fit
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl TrainedForecastModel for TrainedSeasonalRegression {
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>> {
        let n = self.history.len() as f64;

        dates
            .iter()
            .map(|&ds| -> Result<ForecastPoint> {
                let row = design_row(&self.components, ds, self.t_start, self.t_span);
                let yhat = self.regression.predict(&row)? * self.y_scale;

                // The band widens the further a date lies beyond the fitted history.
                let steps_ahead = (epoch_days(ds) - self.t_end).max(0.0);
                let half_width = self.z * self.sigma * (1.0 + steps_ahead / n).sqrt();

                Ok(ForecastPoint {
                    ds,
                    yhat,
                    yhat_lower: yhat - half_width,
                    yhat_upper: yhat + half_width,
                })
            })
            .collect()
    }

    fn history(&self) -> &[NaiveDate] {
        &self.history
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Days from 0001-01-01 to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn epoch_days(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
}

fn design_row(
    components: &[FourierSeasonality],
    date: NaiveDate,
    t_start: f64,
    t_span: f64,
) -> Vec<f64> {
    let t = epoch_days(date);
    let mut row = vec![1.0, (t - t_start) / t_span];
    for component in components {
        row.extend(component.features(t));
    }
    row
}

/// Per-column penalty weights matching `design_row`
fn penalty_weights(components: &[FourierSeasonality], t_span: f64) -> Vec<f64> {
    let mut weights = vec![0.0, 1.0];
    for component in components {
        let weight = if component.period() > t_span {
            UNRESOLVED_PERIOD_WEIGHT
        } else {
            1.0
        };
        weights.extend(std::iter::repeat(weight).take(component.width()));
    }
    weights
}

fn describe(seasonality: &SeasonalityConfig) -> String {
    let mut parts = Vec::new();
    if seasonality.daily {
        parts.push("daily");
    }
    if seasonality.weekly {
        parts.push("weekly");
    }
    if seasonality.yearly {
        parts.push("yearly");
    }
    if parts.is_empty() {
        "Seasonal Regression (trend only)".to_string()
    } else {
        format!("Seasonal Regression ({})", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    fn weekly_series(days: i64) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<NaiveDate> = (0..days).map(|i| start + Duration::days(i)).collect();
        let values = (0..days)
            .map(|i| 50.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
            .collect();
        TimeSeries::new(dates, values).unwrap()
    }

    #[test]
    fn test_recovers_weekly_pattern() {
        let series = weekly_series(84);
        let model = SeasonalRegression::new(SeasonalityConfig {
            daily: false,
            weekly: true,
            yearly: false,
        });
        let trained = model.fit(&series).unwrap();

        // Predicting one full week past the history should repeat the last week.
        let last = series.last_date().unwrap();
        let future: Vec<NaiveDate> = (1..=7).map(|i| last + Duration::days(i)).collect();
        let points = trained.predict(&future).unwrap();

        for (i, point) in points.iter().enumerate() {
            let expected = series.values()[series.len() - 7 + i];
            assert_abs_diff_eq!(point.yhat, expected, epsilon = 1.0);
            assert!(point.yhat_lower <= point.yhat && point.yhat <= point.yhat_upper);
        }
    }

    #[test]
    fn test_band_widens_with_distance() {
        let mut values: Vec<f64> = weekly_series(60).values().to_vec();
        // Add noise so the residual error is non-zero.
        for (i, v) in values.iter_mut().enumerate() {
            *v += if i % 2 == 0 { 3.0 } else { -3.0 };
        }
        let series = TimeSeries::new(weekly_series(60).dates().to_vec(), values).unwrap();
        let trained = SeasonalRegression::default().fit(&series).unwrap();
        assert!(trained.sigma() > 0.0);

        let last = series.last_date().unwrap();
        let points = trained
            .predict(&[last + Duration::days(1), last + Duration::days(90)])
            .unwrap();
        let near = points[0].yhat_upper - points[0].yhat_lower;
        let far = points[1].yhat_upper - points[1].yhat_lower;
        assert!(far > near);
    }

    #[test]
    fn test_default_model_predicts_finite_values() {
        let series = weekly_series(30);
        let trained = SeasonalRegression::default().fit(&series).unwrap();
        let points = trained.predict(series.dates()).unwrap();

        assert_eq!(points.len(), series.len());
        assert_eq!(trained.history(), series.dates());
        assert!(points.iter().all(|p| p.yhat.is_finite()));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let series = weekly_series(45);
        let model = SeasonalRegression::default();
        let a = model.fit(&series).unwrap().predict(series.dates()).unwrap();
        let b = model.fit(&series).unwrap().predict(series.dates()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_short_history_and_bad_parameters() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = TimeSeries::new(vec![date], vec![4.0]).unwrap();
        assert!(SeasonalRegression::default().fit(&series).is_err());

        assert!(SeasonalRegression::default().with_interval_width(1.0).is_err());
        assert!(SeasonalRegression::default().with_ridge_penalty(-0.5).is_err());
    }

    #[test]
    fn test_long_periods_are_penalized_on_short_histories() {
        let components = [FourierSeasonality::yearly(), FourierSeasonality::weekly()];

        let short = penalty_weights(&components, 89.0);
        assert_eq!(short.len(), 2 + 20 + 6);
        assert_eq!(&short[..2], &[0.0, 1.0]);
        assert!(short[2..22].iter().all(|&w| w == UNRESOLVED_PERIOD_WEIGHT));
        assert!(short[22..].iter().all(|&w| w == 1.0));

        let long = penalty_weights(&components, 400.0);
        assert!(long[1..].iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_short_noisy_history_stays_near_its_level() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let dates: Vec<NaiveDate> = (0..90).map(|i| start + Duration::days(i)).collect();
        // Irregular +8/-4 swings around 30.
        let values: Vec<f64> = (0..90)
            .map(|i| 30.0 + if (i * 7 + i / 5) % 3 == 0 { 8.0 } else { -4.0 })
            .collect();
        let series = TimeSeries::new(dates, values).unwrap();
        let mean = series.mean().unwrap();

        let trained = SeasonalRegression::default().fit(&series).unwrap();
        let last = series.last_date().unwrap();
        let future: Vec<NaiveDate> = (1..=30).map(|i| last + Duration::days(i)).collect();
        let points = trained.predict(&future).unwrap();

        for point in &points {
            assert!((point.yhat - mean).abs() < 10.0, "{} vs {}", point.yhat, mean);
        }
    }

    #[test]
    fn test_name_lists_components() {
        assert_eq!(
            SeasonalRegression::default().name(),
            "Seasonal Regression (daily+weekly+yearly)"
        );
    }
}
