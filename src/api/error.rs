//! HTTP error handling: maps lookup failures onto status codes and the fixed
//! client-facing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::model::ErrorResponse;
use crate::utils::error::{ErrorKind, LookupFailure, LookupStage};

pub const MISSING_CEP_MESSAGE: &str = "missing CEP parameter";
pub const INVALID_ZIPCODE_MESSAGE: &str = "invalid zipcode";
pub const ZIPCODE_NOT_FOUND_MESSAGE: &str = "can not find zipcode";
pub const LOCATION_ERROR_MESSAGE: &str = "error retrieving location";
pub const WEATHER_ERROR_MESSAGE: &str = "error retrieving weather information";

#[derive(Debug)]
pub enum ApiError {
    /// 路徑中沒有 CEP 片段
    MissingCode,
    Lookup(LookupFailure),
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingCode => (StatusCode::BAD_REQUEST, MISSING_CEP_MESSAGE),
            ApiError::Lookup(failure) => match (failure.stage, failure.kind()) {
                (LookupStage::Location, ErrorKind::InvalidFormat) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, INVALID_ZIPCODE_MESSAGE)
                }
                (LookupStage::Location, ErrorKind::NotFound) => {
                    (StatusCode::NOT_FOUND, ZIPCODE_NOT_FOUND_MESSAGE)
                }
                (LookupStage::Location, _) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, LOCATION_ERROR_MESSAGE)
                }
                (LookupStage::Weather, _) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, WEATHER_ERROR_MESSAGE)
                }
            },
        }
    }
}

impl From<LookupFailure> for ApiError {
    fn from(failure: LookupFailure) -> Self {
        ApiError::Lookup(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // 上游細節只寫入日誌，不回傳給呼叫端
        match &self {
            ApiError::MissingCode => tracing::info!("Rejected request without CEP"),
            ApiError::Lookup(failure) if status.is_server_error() => {
                tracing::error!("❌ {} ({:?})", failure, failure.kind())
            }
            ApiError::Lookup(failure) => tracing::info!("{} ({:?})", failure, failure.kind()),
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
