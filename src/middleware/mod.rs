// ABOUTME: HTTP middleware for request tracing, correlation ids, and CORS
// ABOUTME: Provides request ID generation, span creation, and cross-origin configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;
/// Request correlation id middleware
pub mod request_id;
/// Request span construction
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
pub use tracing::create_request_span;
