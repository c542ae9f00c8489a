use crate::error::{DashboardError, Result};
use forecast_core::{ForecastReport, ForecastResponse};
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Thin client for the forecast endpoint
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one forecast
    ///
    /// Any payload carrying an `error` field becomes [`DashboardError::Api`],
    /// whatever the HTTP status.
    #[instrument(skip(self))]
    pub async fn get_forecast(
        &self,
        product_id: &str,
        days: u32,
        current_stock: u64,
    ) -> Result<ForecastReport> {
        let url = format!("{}/forecast/prophet", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("product_id", product_id.to_string()),
                ("days", days.to_string()),
                ("current_stock", current_stock.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "forecast response received");

        match serde_json::from_slice::<ForecastResponse>(&bytes) {
            Ok(ForecastResponse::Success(report)) => Ok(report),
            Ok(ForecastResponse::Failure(body)) => Err(DashboardError::Api(body.error)),
            Err(e) if status.is_success() => Err(DashboardError::Api(format!(
                "unreadable forecast payload: {}",
                e
            ))),
            Err(_) => Err(DashboardError::Api(format!("HTTP {}", status))),
        }
    }
}
