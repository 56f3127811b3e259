use crate::config::ConfigError;
use crate::eligibility::evaluation::EligibilityError;
use crate::eligibility::lookup::LookupError;
use crate::eligibility::postal::InvalidFormat;
use crate::eligibility::service::EligibilityServiceError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    PostalCode(InvalidFormat),
    Eligibility(EligibilityError),
    Lookup(LookupError),
    RegionData(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::PostalCode(err) => write!(f, "{}", err),
            AppError::Eligibility(err) => write!(f, "eligibility error: {}", err),
            AppError::Lookup(err) => write!(f, "lookup error: {}", err),
            AppError::RegionData(err) => write!(f, "region data error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::PostalCode(err) => Some(err),
            AppError::Eligibility(err) => Some(err),
            AppError::Lookup(err) => Some(err),
            AppError::RegionData(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::PostalCode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Eligibility(err) if err.is_invalid_input() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Eligibility(_) => StatusCode::BAD_GATEWAY,
            AppError::Lookup(LookupError::RegionNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Lookup(LookupError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::RegionData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<InvalidFormat> for AppError {
    fn from(value: InvalidFormat) -> Self {
        Self::PostalCode(value)
    }
}

impl From<EligibilityError> for AppError {
    fn from(value: EligibilityError) -> Self {
        Self::Eligibility(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::RegionData(value)
    }
}

impl From<EligibilityServiceError> for AppError {
    fn from(value: EligibilityServiceError) -> Self {
        match value {
            EligibilityServiceError::PostalCode(err) => Self::PostalCode(err),
            EligibilityServiceError::Eligibility(err) => Self::Eligibility(err),
            EligibilityServiceError::Lookup(err) => Self::Lookup(err),
        }
    }
}
