pub mod service;
pub mod temperature;

pub use crate::domain::model::{Location, PostalCode, TemperatureReport, WeatherReading};
pub use crate::domain::ports::{ConfigProvider, LocationResolver, WeatherResolver};
pub use crate::utils::error::Result;
