use crate::domain::model::TemperatureReport;
use crate::domain::ports::{LocationResolver, WeatherResolver};
use crate::utils::error::LookupFailure;
use std::sync::Arc;

/// CEP → 地點 → 天氣 → 溫度換算 的查詢鏈
#[derive(Clone)]
pub struct CepWeatherService {
    locations: Arc<dyn LocationResolver>,
    weather: Arc<dyn WeatherResolver>,
}

impl CepWeatherService {
    pub fn new(locations: Arc<dyn LocationResolver>, weather: Arc<dyn WeatherResolver>) -> Self {
        Self { locations, weather }
    }

    pub async fn temperature_for(
        &self,
        code: &str,
    ) -> std::result::Result<TemperatureReport, LookupFailure> {
        tracing::info!("Processing request for CEP: {}", code);

        let location = self
            .locations
            .resolve(code)
            .await
            .map_err(LookupFailure::location)?;

        tracing::info!("Got location: {}, {}", location.city, location.region);

        let reading = self
            .weather
            .resolve(&location.city, &location.region)
            .await
            .map_err(LookupFailure::weather)?;

        let report = TemperatureReport::from(reading);
        tracing::info!(
            "Got weather: tempC={:.2}, tempF={:.2}, tempK={:.2}",
            report.celsius,
            report.fahrenheit,
            report.kelvin
        );

        Ok(report)
    }
}
