//! Date helpers for building prediction frames

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};

/// Consecutive days starting at `origin`, `periods` of them
pub fn future_dates(origin: NaiveDate, periods: usize) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(periods);
    let mut current = origin;

    for _ in 0..periods {
        dates.push(current);
        current = current
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| ForecastError::ValidationError("Date out of range".to_string()))?;
    }

    Ok(dates)
}

/// The fitted history followed by `periods` future days from `origin`
pub fn prediction_frame(
    history: &[NaiveDate],
    origin: NaiveDate,
    periods: usize,
) -> Result<Vec<NaiveDate>> {
    let mut frame = Vec::with_capacity(history.len() + periods);
    frame.extend_from_slice(history);
    frame.extend(future_dates(origin, periods)?);
    Ok(frame)
}

/// Last day of a window of `periods` days starting at `origin`
pub fn window_end(origin: NaiveDate, periods: usize) -> Result<NaiveDate> {
    if periods == 0 {
        return Err(ForecastError::ValidationError(
            "Window must span at least one day".to_string(),
        ));
    }

    origin
        .checked_add_signed(Duration::days(periods as i64 - 1))
        .ok_or_else(|| ForecastError::ValidationError("Date out of range".to_string()))
}
