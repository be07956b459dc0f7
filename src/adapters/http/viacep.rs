use super::normalize_base_url;
use crate::core::{ConfigProvider, Location, LocationResolver, PostalCode};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "viacep";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    /// ViaCEP 以 `"erro": true` (舊版為字串 `"true"`) 表示查無此 CEP
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        let flagged = match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        };
        flagged || self.cep.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self::new(client, config.viacep_base_url())
    }
}

#[async_trait]
impl LocationResolver for ViaCepClient {
    async fn resolve(&self, code: &str) -> Result<Location> {
        let cep = PostalCode::parse(code)?;

        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        tracing::debug!("Calling ViaCEP: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GatewayError::UpstreamUnavailable {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| GatewayError::UpstreamUnavailable {
                service: SERVICE,
                source,
            })?;

        tracing::debug!("ViaCEP response status: {}", status);

        if !status.is_success() {
            tracing::warn!("ViaCEP returned non-OK status {}: {}", status, body);
            return Err(GatewayError::UpstreamError {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let payload: ViaCepResponse = serde_json::from_str(&body).map_err(|source| {
            GatewayError::MalformedUpstreamPayload {
                service: SERVICE,
                source,
            }
        })?;

        if payload.is_not_found() {
            return Err(GatewayError::NotFound {
                cep: cep.to_string(),
            });
        }

        Ok(Location {
            city: payload.localidade,
            region: payload.uf,
            raw_code: payload.cep,
        })
    }
}
