//! HTTP handlers for the REST API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::model::TemperatureReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
///
/// Always answers `ok`; upstream availability is not checked.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /weather/cep/{code}
///
/// Everything after `/weather/cep/` arrives here; only the first segment is
/// taken as the CEP, so `/weather/cep/01001000/extra` still resolves.
pub async fn weather_by_cep(
    State(state): State<AppState>,
    Path(rest): Path<String>,
) -> Result<Json<TemperatureReport>, ApiError> {
    let code = first_segment(&rest).ok_or(ApiError::MissingCode)?;
    let report = state.service.temperature_for(code).await?;
    Ok(Json(report))
}

/// GET /weather/cep and GET /weather/cep/
pub async fn missing_cep() -> ApiError {
    ApiError::MissingCode
}

fn first_segment(rest: &str) -> Option<&str> {
    rest.split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
