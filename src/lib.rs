pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{ViaCepClient, WeatherApiClient};
pub use api::{create_router, AppState};
pub use config::{CliConfig, TomlConfig};
pub use core::service::CepWeatherService;
pub use utils::error::{GatewayError, Result};
