use crate::domain::model::{Location, WeatherReading};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> Result<SocketAddr>;
    fn viacep_base_url(&self) -> &str;
    fn weather_api_base_url(&self) -> &str;
    fn weather_api_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, code: &str) -> Result<Location>;
}

#[async_trait]
pub trait WeatherResolver: Send + Sync {
    async fn resolve(&self, city: &str, region: &str) -> Result<WeatherReading>;
}
