// ABOUTME: Application constants re-exported from the calorie-core crate
// ABOUTME: Keeps crate::constants paths stable for routes, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Service names, defaults, route paths, environment variable names, and
//! client-facing error messages all live in `calorie_core::constants`.

pub use calorie_core::constants::*;
