use super::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_VIACEP_BASE_URL,
    DEFAULT_WEATHER_API_BASE_URL,
};
use crate::core::ConfigProvider;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").unwrap()
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub viacep: ViaCepConfig,
    pub weather_api: WeatherApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaCepConfig {
    #[serde(default = "default_viacep_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    #[serde(default = "default_weather_api_base_url")]
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_viacep_base_url() -> String {
    DEFAULT_VIACEP_BASE_URL.to_string()
}

fn default_weather_api_base_url() -> String {
    DEFAULT_WEATHER_API_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: default_viacep_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GatewayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WEATHER_API_KEY})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| GatewayError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: addr.clone(),
                reason: format!("Invalid bind address: {}", e),
            })
    }

    fn viacep_base_url(&self) -> &str {
        &self.viacep.base_url
    }

    fn weather_api_base_url(&self) -> &str {
        &self.weather_api.base_url
    }

    fn weather_api_key(&self) -> &str {
        &self.weather_api.api_key
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("viacep.base_url", &self.viacep.base_url)?;
        validate_url("weather_api.base_url", &self.weather_api.base_url)?;
        validate_non_empty_string("weather_api.api_key", &self.weather_api.api_key)?;

        // 環境變數未設定時，佔位字串會原樣留下
        if ENV_PLACEHOLDER.is_match(&self.weather_api.api_key) {
            return Err(GatewayError::MissingConfigError {
                field: "weather_api.api_key".to_string(),
            });
        }

        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 60)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        self.bind_address()?;

        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}
