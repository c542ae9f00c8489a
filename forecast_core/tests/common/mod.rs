#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use forecast_core::models::{ForecastModel, ForecastPoint, TrainedForecastModel};
use forecast_core::{Result, TimeSeries};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const HEADER: &str = "date,product_id,product,units_sold";

/// `days` consecutive rows starting at 2024-01-01 with a simple weekly rhythm
pub fn sales_rows(product_id: &str, product: &str, days: i64) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i);
            let units = 20 + (i % 7) * 3;
            format!("{},{},{},{}", date, product_id, product, units)
        })
        .collect()
}

/// `days` rows ending on `end`, around 30 units/day with +/-10 of
/// pseudo-random noise from a fixed-seed LCG
pub fn noisy_sales_rows(
    product_id: &str,
    product: &str,
    end: NaiveDate,
    days: i64,
    seed: u64,
) -> Vec<String> {
    let mut state = seed;
    (0..days)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (state >> 33) as f64 / (1u64 << 31) as f64;
            let units = (30.0 + 20.0 * (unit - 0.5)).round() as u64;
            let date = end - Duration::days(days - 1 - i);
            format!("{},{},{},{}", date, product_id, product, units)
        })
        .collect()
}

/// Mean of the `units_sold` column of rows built by this module
pub fn mean_units(rows: &[String]) -> f64 {
    let total: f64 = rows
        .iter()
        .map(|row| row.rsplit(',').next().unwrap().parse::<f64>().unwrap())
        .sum();
    total / rows.len() as f64
}

pub fn write_csv(path: &Path, rows: &[String]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut body = String::from(HEADER);
    body.push('\n');
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(path, body).unwrap();
}

/// Engine that predicts a constant level and counts how often it is fitted
#[derive(Debug, Clone)]
pub struct ConstantModel {
    pub level: f64,
    pub fits: Arc<AtomicUsize>,
}

impl ConstantModel {
    pub fn new(level: f64) -> Self {
        Self {
            level,
            fits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fit_count(&self) -> usize {
        self.fits.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct TrainedConstant {
    level: f64,
    history: Vec<NaiveDate>,
}

impl ForecastModel for ConstantModel {
    type Trained = TrainedConstant;

    fn fit(&self, series: &TimeSeries) -> Result<Self::Trained> {
        self.fits.fetch_add(1, Ordering::SeqCst);
        Ok(TrainedConstant {
            level: self.level,
            history: series.dates().to_vec(),
        })
    }

    fn name(&self) -> &str {
        "constant"
    }
}

impl TrainedForecastModel for TrainedConstant {
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>> {
        Ok(dates
            .iter()
            .map(|&ds| ForecastPoint {
                ds,
                yhat: self.level,
                yhat_lower: self.level - 2.0,
                yhat_upper: self.level + 2.0,
            })
            .collect())
    }

    fn history(&self) -> &[NaiveDate] {
        &self.history
    }

    fn name(&self) -> &str {
        "constant"
    }
}
