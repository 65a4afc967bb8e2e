// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, defaults, routes, and messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Error messages surfaced verbatim to API clients
pub mod errors;

pub use errors::*;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary and default tracing target
    pub const CALORIE_API_SERVER: &str = "calorie-api-server";
}

/// Default values for server bootstrap
pub mod defaults {
    /// Bind address when `HOST` is unset
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Listen port when `HTTP_PORT` is unset
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// HTTP route paths
pub mod routes {
    /// Calorie estimation endpoint
    pub const CALCULATE_CALORIES: &str = "/calculate-calories";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Comma-separated list of allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}
