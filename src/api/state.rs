use std::sync::Arc;

use crate::adapters::http::{build_client, ViaCepClient, WeatherApiClient};
use crate::core::service::CepWeatherService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

/// Shared application state handed to every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CepWeatherService>,
}

impl AppState {
    pub fn new(service: CepWeatherService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// 依設定建立兩個上游 client，共用同一個連線池
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = build_client(config.request_timeout())?;
        let locations = ViaCepClient::from_config(client.clone(), config);
        let weather = WeatherApiClient::from_config(client, config);

        Ok(Self::new(CepWeatherService::new(
            Arc::new(locations),
            Arc::new(weather),
        )))
    }
}
