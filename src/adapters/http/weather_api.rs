use super::normalize_base_url;
use crate::core::{ConfigProvider, WeatherReading, WeatherResolver};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::form_urlencoded;

const SERVICE: &str = "weatherapi";

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self::new(
            client,
            config.weather_api_base_url(),
            config.weather_api_key(),
        )
    }

    /// `q` 參數為 `city,region`，兩者各自編碼，逗號保留原樣
    fn current_url(&self, city: &str, region: &str) -> String {
        format!(
            "{}/current.json?key={}&q={},{}&aqi=no",
            self.base_url,
            encode(&self.api_key),
            encode(city),
            encode(region)
        )
    }
}

#[async_trait]
impl WeatherResolver for WeatherApiClient {
    async fn resolve(&self, city: &str, region: &str) -> Result<WeatherReading> {
        tracing::debug!("Calling WeatherAPI for {}, {}", city, region);

        let response = self
            .client
            .get(self.current_url(city, region))
            .send()
            .await
            .map_err(|source| GatewayError::UpstreamUnavailable {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        tracing::debug!("WeatherAPI response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|source| GatewayError::UpstreamUnavailable {
                service: SERVICE,
                source,
            })?;

        tracing::debug!("WeatherAPI response body: {}", body);

        if !status.is_success() {
            tracing::warn!("WeatherAPI returned non-OK status: {}", status.as_u16());
            return Err(GatewayError::UpstreamError {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let payload: WeatherApiResponse = serde_json::from_str(&body).map_err(|source| {
            GatewayError::MalformedUpstreamPayload {
                service: SERVICE,
                source,
            }
        })?;

        Ok(WeatherReading {
            celsius: payload.current.temp_c,
        })
    }
}
