use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Could not reach the forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Forecast service returned an error: {0}")]
    Api(String),

    #[error("Could not read product metadata: {0}")]
    Metadata(#[from] forecast_core::ForecastError),

    #[error("Could not render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
