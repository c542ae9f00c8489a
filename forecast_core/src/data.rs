//! Historical sales access
//!
//! Sales live in two CSV layouts with the header
//! `date,product_id,product,units_sold`: one file per product under a
//! products directory, and a combined file holding every product. The
//! per-product file wins when present; otherwise the combined file is
//! filtered by product id.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the combined store inside a data directory
pub const COMBINED_FILE_NAME: &str = "historical_sales.csv";
/// Directory name of the per-product store inside a data directory
pub const PRODUCTS_DIR_NAME: &str = "products";

/// One day of sales for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product_id: String,
    pub product: String,
    pub units_sold: u64,
}

/// Read-only access to the per-product and combined sales stores
#[derive(Debug, Clone)]
pub struct SalesStore {
    products_dir: PathBuf,
    combined_file: PathBuf,
}

impl SalesStore {
    /// Create a store from explicit locations
    pub fn new<P: Into<PathBuf>, C: Into<PathBuf>>(products_dir: P, combined_file: C) -> Self {
        Self {
            products_dir: products_dir.into(),
            combined_file: combined_file.into(),
        }
    }

    /// Create a store using the conventional layout under `dir`
    pub fn from_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(PRODUCTS_DIR_NAME), dir.join(COMBINED_FILE_NAME))
    }

    pub fn products_dir(&self) -> &Path {
        &self.products_dir
    }

    pub fn combined_file(&self) -> &Path {
        &self.combined_file
    }

    /// Path of the per-product file, if the id is a plain file stem
    pub fn product_path(&self, product_id: &str) -> Option<PathBuf> {
        is_safe_product_id(product_id).then(|| self.products_dir.join(format!("{product_id}.csv")))
    }

    /// Load the full history of a product, ordered by date
    ///
    /// Unreadable files are logged and reported as `NotFound`, the same as
    /// a product that has no rows at all.
    pub fn load_product(&self, product_id: &str) -> Result<Vec<SalesRecord>> {
        let Some(per_product) = self.product_path(product_id) else {
            warn!(product_id, "rejected product id that is not a plain file stem");
            return Err(ForecastError::NotFound(product_id.to_string()));
        };

        let loaded = if per_product.exists() {
            debug!(path = %per_product.display(), "reading per-product sales");
            read_sales_csv(&per_product)
        } else if self.combined_file.exists() {
            debug!(path = %self.combined_file.display(), "filtering combined sales");
            read_product_from_combined(&self.combined_file, product_id)
        } else {
            Ok(Vec::new())
        };

        let mut records = match loaded {
            Ok(records) => records,
            Err(err) => {
                warn!(product_id, error = %err, "failed to read sales history");
                return Err(ForecastError::NotFound(product_id.to_string()));
            }
        };

        if records.is_empty() {
            return Err(ForecastError::NotFound(product_id.to_string()));
        }

        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

/// Read every record of a sales CSV
pub fn read_sales_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SalesRecord>, csv::Error>>()?;
    Ok(records)
}

fn read_product_from_combined(path: &Path, product_id: &str) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<SalesRecord>() {
        let record = row?;
        if record.product_id == product_id {
            records.push(record);
        }
    }
    Ok(records)
}

fn is_safe_product_id(product_id: &str) -> bool {
    !product_id.is_empty()
        && product_id != "."
        && product_id != ".."
        && !product_id.contains(['/', '\\', '\0'])
}

/// Two-column series handed to a forecasting model
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    ds: Vec<NaiveDate>,
    y: Vec<f64>,
}

impl TimeSeries {
    /// Create a new series from aligned dates and observations
    pub fn new(ds: Vec<NaiveDate>, y: Vec<f64>) -> Result<Self> {
        if ds.len() != y.len() {
            return Err(ForecastError::DataError(format!(
                "Dates length ({}) doesn't match values length ({})",
                ds.len(),
                y.len()
            )));
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::DataError(
                "Series contains non-finite observations".to_string(),
            ));
        }

        Ok(Self { ds, y })
    }

    /// Project sales records onto `(date, units_sold)`, preserving order
    pub fn from_records(records: &[SalesRecord]) -> Self {
        Self {
            ds: records.iter().map(|r| r.date).collect(),
            y: records.iter().map(|r| r.units_sold as f64).collect(),
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.ds
    }

    pub fn values(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.ds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.ds.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.ds.last().copied()
    }

    /// Mean of the observations
    pub fn mean(&self) -> Result<f64> {
        Ok(demand_math::stats::mean(&self.y)?)
    }

    /// Calendar features for every date in the series
    pub fn calendar_features(&self) -> Vec<CalendarFeatures> {
        self.ds.iter().map(|&d| CalendarFeatures::from_date(d)).collect()
    }
}

/// Calendar attributes of a sales day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    /// January = 1 .. December = 12
    pub month: u32,
    pub is_weekend: bool,
}

impl CalendarFeatures {
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        Self {
            day_of_week: weekday.num_days_from_monday(),
            month: date.month(),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }
}
