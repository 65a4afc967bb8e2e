// ABOUTME: Core types and constants for the calorie estimation API
// ABOUTME: Foundation crate with error handling and application-wide constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate providing shared types and constants for the calorie
//! estimation service. Kept separate so the HTTP crate can change without
//! rebuilding the error vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Service names, defaults, route paths, and user-facing messages

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
