// ABOUTME: Unified error handling with standard error codes and HTTP response mapping
// ABOUTME: Every failure surfaced over the wire flows through AppError into a {message} body
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! # Unified Error Handling
//!
//! Central error type for the ironlog backend. Each [`ErrorCode`] carries its
//! HTTP status; [`AppError`] renders as the flat `{"message": "..."}` body the
//! API clients expect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Missing or invalid authentication token
    #[serde(rename = "NOT_AUTHENTICATED")]
    NotAuthenticated,
    /// Authenticated but not permitted (e.g. non-owner plan edit)
    #[serde(rename = "NOT_AUTHORIZED")]
    NotAuthorized,
    /// Authenticated but the account has not been activated
    #[serde(rename = "USER_INACTIVE")]
    UserInactive,
    /// Structural/schema violation of a submitted document
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Referenced exercise or plan does not resolve
    #[serde(rename = "INVALID_REFERENCE")]
    InvalidReference,
    /// Chronological invariant violated
    #[serde(rename = "INVALID_TIME")]
    InvalidTime,
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Persistence layer unreachable or rejected the operation
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::NotAuthenticated | Self::NotAuthorized => StatusCode::UNAUTHORIZED,
            Self::UserInactive => StatusCode::FORBIDDEN,
            Self::InvalidInput | Self::InvalidReference | Self::InvalidTime => {
                StatusCode::BAD_REQUEST
            }
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Message rendered on the wire
    pub message: String,
    /// Optional per-field details (exercise validation reports these)
    pub validation_errors: Option<serde_json::Value>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            validation_errors: None,
        }
    }

    /// Missing or unverifiable credential token
    #[must_use]
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated, "Not authenticated")
    }

    /// Authenticated but not allowed to touch the resource
    #[must_use]
    pub fn not_authorized() -> Self {
        Self::new(ErrorCode::NotAuthorized, "Not authorized")
    }

    /// Authenticated but the account is still inactive
    #[must_use]
    pub fn user_inactive() -> Self {
        Self::new(ErrorCode::UserInactive, "User inactive")
    }

    /// Structural/schema violation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Per-field validation failure, rendered as `{"validationErrors": {...}}`
    #[must_use]
    pub fn validation_errors(errors: serde_json::Value) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            message: "Validation failure".into(),
            validation_errors: Some(errors),
        }
    }

    /// Dangling exercise or plan reference
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidReference, message)
    }

    /// Chronology violation
    #[must_use]
    pub fn invalid_time() -> Self {
        Self::new(ErrorCode::InvalidTime, "Invalid time input")
    }

    /// Resource lookup miss
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Persistence failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Catch-all internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = ?self.code, message = %self.message, "request failed");
        } else {
            tracing::debug!(code = ?self.code, message = %self.message, "request rejected");
        }
        let body = self.validation_errors.map_or_else(
            || serde_json::json!({ "message": self.message }),
            |errors| serde_json::json!({ "validationErrors": errors }),
        );
        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
