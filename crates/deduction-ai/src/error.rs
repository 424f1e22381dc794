use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::fieldnotes::FieldNoteImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Top-level failure type shared by the library surfaces and the service
/// binary. Import failures are caller mistakes; everything else is
/// operational.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Import(FieldNoteImportError),
    Io(std::io::Error),
    Server(axum::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, err): (&str, &dyn fmt::Display) = match self {
            Self::Config(err) => ("configuration error", err),
            Self::Telemetry(err) => ("telemetry error", err),
            Self::Import(err) => ("import error", err),
            Self::Io(err) => ("io error", err),
            Self::Server(err) => ("server error", err),
        };
        write!(f, "{label}: {err}")
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Telemetry(err) => Some(err),
            Self::Import(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Server(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Import(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        Self::Telemetry(err)
    }
}

impl From<FieldNoteImportError> for AppError {
    fn from(err: FieldNoteImportError) -> Self {
        Self::Import(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        Self::Server(err)
    }
}
