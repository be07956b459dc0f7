//! Outbound HTTP adapters for the two upstream services.

pub mod viacep;
pub mod weather_api;

pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;

use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));

/// 建立共用的 HTTP client，每個請求都受 timeout 限制
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
