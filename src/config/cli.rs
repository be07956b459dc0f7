use super::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_VIACEP_BASE_URL,
    DEFAULT_WEATHER_API_BASE_URL,
};
use crate::core::ConfigProvider;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cep-weather")]
#[command(about = "Current temperature for a Brazilian postal code (CEP)")]
pub struct CliConfig {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "VIACEP_BASE_URL", default_value = DEFAULT_VIACEP_BASE_URL)]
    pub viacep_base_url: String,

    #[arg(long, env = "WEATHER_API_BASE_URL", default_value = DEFAULT_WEATHER_API_BASE_URL)]
    pub weather_api_base_url: String,

    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| GatewayError::InvalidConfigValueError {
                field: "host".to_string(),
                value: addr.clone(),
                reason: format!("Invalid bind address: {}", e),
            })
    }

    fn viacep_base_url(&self) -> &str {
        &self.viacep_base_url
    }

    fn weather_api_base_url(&self) -> &str {
        &self.weather_api_base_url
    }

    fn weather_api_key(&self) -> &str {
        self.weather_api_key.as_deref().unwrap_or_default()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("viacep_base_url", &self.viacep_base_url)?;
        validate_url("weather_api_base_url", &self.weather_api_base_url)?;

        let key = validate_required_field("weather_api_key", &self.weather_api_key)?;
        validate_non_empty_string("weather_api_key", key)?;

        validate_range("timeout_seconds", self.timeout_seconds, 1, 60)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        self.bind_address()?;

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}
