// ABOUTME: Profile fixtures and router construction shared across HTTP tests
// ABOUTME: Builds the full application router with default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::Router;
use calorie_api::{config::ServerConfig, server::build_router};
use serde_json::{json, Value};

/// Full application router with default configuration
pub fn test_app() -> Router {
    build_router(&ServerConfig::default())
}

/// Male, 70 kg, 175 cm, 25 years, moderately active, maintaining weight
pub fn reference_profile() -> Value {
    json!({
        "gender": "male",
        "weight": 70,
        "height": 175,
        "age": 25,
        "activity_level": "moderately active",
        "goal": "maintain weight"
    })
}

/// Reference profile with one field replaced
pub fn profile_with(field: &str, value: Value) -> Value {
    let mut profile = reference_profile();
    profile[field] = value;
    profile
}

/// Reference profile with one field removed
#[allow(dead_code)]
pub fn profile_without(field: &str) -> Value {
    let mut profile = reference_profile();
    if let Some(object) = profile.as_object_mut() {
        object.remove(field);
    }
    profile
}
