use crate::core::temperature;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const POSTAL_CODE_DIGITS: usize = 8;

/// 正規化後恰好 8 位數字的 CEP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// 移除所有非數字字元後驗證長度
    pub fn parse(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != POSTAL_CODE_DIGITS {
            return Err(GatewayError::InvalidFormat {
                input: raw.to_string(),
            });
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// 兩碼州別 (UF)
    pub region: String,
    pub raw_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub celsius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl TemperatureReport {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: temperature::celsius_to_fahrenheit(celsius),
            kelvin: temperature::celsius_to_kelvin(celsius),
        }
    }
}

impl From<WeatherReading> for TemperatureReport {
    fn from(reading: WeatherReading) -> Self {
        Self::from_celsius(reading.celsius)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
