// ABOUTME: Main library entry point for the calorie estimation API
// ABOUTME: Exposes the estimator, HTTP routes, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie API
//!
//! Estimates a person's daily calorie requirement from gender, weight,
//! height, age, activity level, and a weight-management goal.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure calorie estimator (validation + Harris-Benedict BMR)
//! - **Routes**: axum handlers for `POST /calculate-calories` and health probes
//! - **Middleware**: request ids, request spans, and CORS
//! - **Config**: environment-only server configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use calorie_api::intelligence::{estimate, ProfileRequest};
//!
//! let request = ProfileRequest {
//!     gender: Some("female".to_owned()),
//!     weight: Some(60.0),
//!     height: Some(165.0),
//!     age: Some(30),
//!     activity_level: Some("sedentary".to_owned()),
//!     goal: Some("lose weight".to_owned()),
//! };
//!
//! let result = estimate(&request).expect("valid profile");
//! assert_eq!(result.goal, "Lose Weight");
//! ```

/// Configuration management
pub mod config;

/// Application constants (re-exported from `calorie-core`)
pub mod constants;

/// Unified error handling (re-exported from `calorie-core`)
pub mod errors;

/// Calorie estimation algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request ids, tracing spans, CORS)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
