// ABOUTME: Unified error handling with error codes, HTTP status mapping, and response bodies
// ABOUTME: Provides AppError, ErrorCode, and the flat {"error": ...} wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error type for the calorie API. Every failure that reaches an
//! HTTP client goes through [`AppError`], which carries an [`ErrorCode`] for
//! status mapping and a message that is returned to the client unchanged.

use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "http-response")]
mod http_response;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A field value is not one of the accepted values
    InvalidInput = 3000,
    /// A required field is absent or null
    MissingRequiredField = 3001,
    /// The payload could not be parsed
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Unknown route or resource
    ResourceNotFound = 4000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => 400,
            Self::ResourceNotFound => 404,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, returned to clients as-is
    pub message: String,
    /// Correlation id of the request that failed, if known
    pub request_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Attach the request correlation id
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    #[must_use]
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Payload could not be parsed
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }
}

/// HTTP error response body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Message describing why the request was rejected
    pub error: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::missing_field("Missing data in request").with_request_id("req-123");

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.request_id.as_deref(), Some("req-123"));
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_input("Invalid gender value");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: Invalid gender value"
        );
    }

    #[test]
    fn test_not_found_names_the_resource() {
        let error = AppError::not_found("Route");

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Route not found");
        assert_eq!(error.http_status(), 404);
    }

    #[test]
    fn test_error_response_is_flat() {
        let response = ErrorResponse::from(AppError::invalid_input("Invalid goal value"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Invalid goal value" }));
    }
}
