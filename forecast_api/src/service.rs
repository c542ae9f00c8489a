use forecast_core::{DemandForecaster, ForecastModel, ForecastReport, ForecastRequest};

/// Anything that can turn a validated request into a report
///
/// Implementations run synchronously; the handler moves the call onto the
/// blocking pool.
pub trait ForecastService: Send + Sync {
    fn forecast(&self, request: &ForecastRequest) -> forecast_core::Result<ForecastReport>;
}

impl<M> ForecastService for DemandForecaster<M>
where
    M: ForecastModel + Send + Sync,
{
    fn forecast(&self, request: &ForecastRequest) -> forecast_core::Result<ForecastReport> {
        self.forecast_today(request)
    }
}
