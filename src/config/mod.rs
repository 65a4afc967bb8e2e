// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads bind address, port, CORS, and log level from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the calorie API
//!
//! Configuration is environment-only; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, LogLevel, ServerConfig};
