// ABOUTME: Axum integration for AppError so handlers can return Result<_, AppError>
// ABOUTME: Renders the flat {"error": ...} body with the status mapped from ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::debug;

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        debug!(
            code = ?self.code,
            request_id = self.request_id.as_deref().unwrap_or("-"),
            "request rejected: {}",
            self.message
        );

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
