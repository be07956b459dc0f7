pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";
pub const DEFAULT_WEATHER_API_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// 有 `--config` 時改用 TOML 檔，否則使用命令列/環境變數；兩者都會先驗證
pub fn load(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}
