use thiserror::Error;

/// 錯誤分類標籤，決定對外回應的 HTTP 狀態碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
    UpstreamUnavailable,
    UpstreamError,
    MalformedUpstreamPayload,
    Configuration,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("invalid zipcode: {input:?}")]
    InvalidFormat { input: String },

    #[error("can not find zipcode: {cep}")]
    NotFound { cep: String },

    #[error("{service} request failed: {source}")]
    UpstreamUnavailable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}: {body}")]
    UpstreamError {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} returned a malformed payload: {source}")]
    MalformedUpstreamPayload {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            GatewayError::NotFound { .. } => ErrorKind::NotFound,
            GatewayError::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            GatewayError::UpstreamError { .. } => ErrorKind::UpstreamError,
            GatewayError::MalformedUpstreamPayload { .. } => ErrorKind::MalformedUpstreamPayload,
            GatewayError::HttpClientError(_)
            | GatewayError::IoError(_)
            | GatewayError::ConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. }
            | GatewayError::MissingConfigError { .. } => ErrorKind::Configuration,
        }
    }
}

/// 查詢鏈中失敗的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Location,
    Weather,
}

#[derive(Error, Debug)]
#[error("{stage:?} lookup failed: {source}")]
pub struct LookupFailure {
    pub stage: LookupStage,
    #[source]
    pub source: GatewayError,
}

impl LookupFailure {
    pub fn location(source: GatewayError) -> Self {
        Self {
            stage: LookupStage::Location,
            source,
        }
    }

    pub fn weather(source: GatewayError) -> Self {
        Self {
            stage: LookupStage::Weather,
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
