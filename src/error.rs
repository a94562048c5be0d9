use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::validation::ValidationError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Usage or pricing value outside its allowed range
    InvalidInput { field: String, message: String },
    /// Configuration or pricing override error
    ConfigError(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid value for '{}': {}", field, message)
            }
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::InvalidInput { field, .. } => json!({
                "error": {
                    "message": self.to_string(),
                    "type": error_type_name(&self),
                    "field": field,
                }
            }),
            Self::ConfigError(msg) | Self::InternalError(msg) => json!({
                "error": {
                    "message": msg,
                    "type": error_type_name(&self),
                }
            }),
        };

        (status, Json(body)).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidInput { .. } => "invalid_input",
        AppError::ConfigError(_) => "config_error",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidInput { field, message } => {
                Self::InvalidInput { field, message }
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::ConfigError("missing file".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn test_validation_error_conversion_keeps_field() {
        let error: AppError = ValidationError::InvalidInput {
            field: "contract.contract_years".to_string(),
            message: "must be at least 1".to_string(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Invalid value for 'contract.contract_years': must be at least 1"
        );
        assert_eq!(error_type_name(&error), "invalid_input");
    }

    #[tokio::test]
    async fn test_error_response() {
        let error = AppError::InvalidInput {
            field: "marengo.video_hours".to_string(),
            message: "must not be negative, got -1".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::InternalError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
