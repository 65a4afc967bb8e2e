// ABOUTME: Unified error handling re-exported from the calorie-core crate
// ABOUTME: AppError implements IntoResponse via the http-response feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error codes, `AppError`, and the flat `{"error": ...}` response body
//! live in `calorie_core::errors`.

pub use calorie_core::errors::*;
