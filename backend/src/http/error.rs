//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::db::{CreateWorkOrderError, RepositoryError};
use crate::services::{CalendarError, RouteError, ValidationErrors};

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
    /// Per-field messages for form validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
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
    /// Resource not found
    NotFound(String),
    /// Malformed request (bad query value, unknown route stop)
    BadRequest(String),
    /// No session on the request
    Unauthorized(String),
    /// Session role may not see this resource
    Forbidden(String),
    /// Form fields failed validation
    Validation(ValidationErrors),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::ConnectionError { .. }
                | RepositoryError::UpstreamError { .. }
                | RepositoryError::TimeoutError { .. }
                | RepositoryError::DecodeError { .. } => StatusCode::BAD_GATEWAY,
                RepositoryError::ConfigurationError { .. }
                | RepositoryError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::NotFound(msg) => ApiError::new("NOT_FOUND", msg),
            AppError::BadRequest(msg) => ApiError::new("BAD_REQUEST", msg),
            AppError::Unauthorized(msg) => ApiError::new("UNAUTHORIZED", msg),
            AppError::Forbidden(msg) => ApiError::new("FORBIDDEN", msg),
            AppError::Validation(errors) => ApiError {
                fields: Some(errors.fields.clone()),
                ..ApiError::new("VALIDATION_FAILED", errors.to_string())
            },
            AppError::Internal(msg) => ApiError::new("INTERNAL_ERROR", msg),
            AppError::Repository(e) => {
                let code = match status {
                    StatusCode::NOT_FOUND => "NOT_FOUND",
                    StatusCode::BAD_GATEWAY => "UPSTREAM_ERROR",
                    _ => "REPOSITORY_ERROR",
                };
                let api = ApiError::new(code, e.to_string());
                match &e.context().details {
                    Some(details) => api.with_details(details.clone()),
                    None => api,
                }
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err)
    }
}

impl From<CreateWorkOrderError> for AppError {
    fn from(err: CreateWorkOrderError) -> Self {
        match err {
            CreateWorkOrderError::Validation(errors) => AppError::Validation(errors),
            CreateWorkOrderError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_map_to_status() {
        let cases = [
            (RepositoryError::not_found("x"), StatusCode::NOT_FOUND),
            (RepositoryError::connection("x"), StatusCode::BAD_GATEWAY),
            (RepositoryError::upstream("x"), StatusCode::BAD_GATEWAY),
            (RepositoryError::timeout("x"), StatusCode::BAD_GATEWAY),
            (RepositoryError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_validation_is_unprocessable() {
        let mut errors = ValidationErrors::default();
        errors.add("title", "Title is required");
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_body_carries_fields() {
        let mut errors = ValidationErrors::default();
        errors.add("title", "Title is required");
        let body = ApiError {
            fields: Some(errors.fields.clone()),
            ..ApiError::new("VALIDATION_FAILED", errors.to_string())
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "VALIDATION_FAILED");
        assert_eq!(value["fields"]["title"][0], "Title is required");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_auth_errors() {
        assert_eq!(
            AppError::Unauthorized("no session".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("clients".into()).status(),
            StatusCode::FORBIDDEN
        );
    }
}
