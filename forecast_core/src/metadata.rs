//! Product metadata table
//!
//! A one-row-per-product lookup of `product_id,product`, regenerated offline
//! from the combined sales file and read by the dashboard to build its
//! product picker.

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Default location of the combined sales file
pub const DEFAULT_SOURCE: &str = "data/processed/historical_sales.csv";
/// Default location of the generated metadata table
pub const DEFAULT_DESTINATION: &str = "data/processed/product_metadata.csv";

/// One entry of the metadata table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub product_id: String,
    pub product: String,
}

impl ProductMetadata {
    /// Label shown in a product picker, e.g. `Bamboo Brush (BB0001)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.product, self.product_id)
    }
}

/// Write one row per distinct product id found in `source` to `destination`
///
/// Returns the number of products written. Fails with `MissingSource` when
/// the combined sales file has not been produced yet.
pub fn generate_metadata(source: &Path, destination: &Path) -> Result<usize> {
    if !source.is_file() {
        return Err(ForecastError::MissingSource(source.to_path_buf()));
    }

    let sales = CsvReader::from_path(source)?
        .has_header(true)
        .with_columns(Some(vec!["product_id".to_string(), "product".to_string()]))
        .finish()?;

    let subset = ["product_id".to_string()];
    let mut products = sales.unique_stable(Some(&subset), UniqueKeepStrategy::First, None)?;

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(destination)?;
    CsvWriter::new(&mut file)
        .has_header(true)
        .finish(&mut products)?;

    let count = products.height();
    info!(
        destination = %destination.display(),
        products = count,
        "metadata saved"
    );
    Ok(count)
}

/// Read a metadata table; a missing file yields an empty table
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Vec<ProductMetadata>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let entries = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ProductMetadata>, csv::Error>>()?;
    Ok(entries)
}
