// ABOUTME: Calorie estimation route handler for POST /calculate-calories
// ABOUTME: Parses the JSON profile, runs the estimator, and maps validation failures to 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie estimation routes
//!
//! Thin HTTP layer over [`crate::intelligence::calorie_estimator`]. The handler
//! owns everything the estimator must not do: body parsing, logging, and
//! response serialization.

use crate::{
    constants::{routes, MSG_MALFORMED_BODY},
    errors::AppError,
    intelligence::calorie_estimator::{estimate, CalorieEstimate, ProfileRequest},
    middleware::RequestId,
};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use tracing::{debug, info, Span};

/// Calorie estimation routes
pub struct CalorieRoutes;

impl CalorieRoutes {
    /// Create the calorie estimation routes
    pub fn routes() -> Router {
        Router::new().route(routes::CALCULATE_CALORIES, post(Self::handle_calculate_calories))
    }

    /// Handle `POST /calculate-calories`
    async fn handle_calculate_calories(
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map_or_else(
            || "-".to_owned(),
            |Extension(id)| id.as_str().to_owned(),
        );

        let Json(profile) = payload.map_err(|rejection| {
            debug!(request_id = %request_id, "rejecting request body: {rejection}");
            AppError::invalid_format(MSG_MALFORMED_BODY).with_request_id(&request_id)
        })?;

        let calorie_estimate: CalorieEstimate = estimate(&profile)
            .map_err(|error| AppError::from(error).with_request_id(&request_id))?;

        info!(
            request_id = %request_id,
            bmr = calorie_estimate.bmr,
            calories_needed = calorie_estimate.calories_needed,
            goal = %calorie_estimate.goal,
            activity_level = %calorie_estimate.activity_level,
            "Calorie estimate computed"
        );
        Span::current().record("status_code", StatusCode::OK.as_u16());

        Ok((StatusCode::OK, Json(calorie_estimate)).into_response())
    }
}
