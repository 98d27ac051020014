//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, OracleError};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body is not valid JSON or misses required fields
    InvalidBody(String),
    /// Chart pipeline failure
    Chart(ChartError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::InvalidBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_BODY", msg),
            ),
            AppError::Chart(ChartError::Validation(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("VALIDATION_ERROR", e.reason).with_details(e.field),
            ),
            AppError::Chart(ChartError::Timezone(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("TIMEZONE_ERROR", e.to_string()).with_details(e.name),
            ),
            AppError::Chart(ChartError::Oracle(e)) => {
                let status = match e {
                    OracleError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, ApiError::new("ORACLE_ERROR", e.to_string()))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        } else {
            tracing::debug!(code = %error.code, "{}", error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::Chart(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TimezoneError, ValidationError};

    #[test]
    fn validation_maps_to_422_with_field() {
        let err: AppError = ChartError::from(ValidationError::new("birthTime", "bad")).into();
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.details.as_deref(), Some("birthTime"));
    }

    #[test]
    fn timezone_maps_to_422() {
        let err: AppError = ChartError::from(TimezoneError {
            name: "Not/AZone".into(),
        })
        .into();
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "TIMEZONE_ERROR");
    }

    #[test]
    fn oracle_status_depends_on_cause() {
        let rejected: AppError =
            ChartError::from(OracleError::UnsupportedHouseSystem("Z".into())).into();
        assert_eq!(rejected.status_and_body().0, StatusCode::UNPROCESSABLE_ENTITY);

        let failed: AppError = ChartError::from(OracleError::Failed("nan".into())).into();
        let (status, body) = failed.status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "ORACLE_ERROR");
    }

    #[test]
    fn details_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::new("INVALID_BODY", "x")).unwrap();
        assert!(json.get("details").is_none());
    }
}
