// ABOUTME: Route module organization for the calorie API HTTP endpoints
// ABOUTME: Provides route definitions by domain, merged by the server into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the calorie API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the intelligence layer.

/// Calorie estimation routes
pub mod calories;
/// Health check and readiness routes
pub mod health;

pub use calories::CalorieRoutes;
pub use health::HealthRoutes;
