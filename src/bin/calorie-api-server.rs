// ABOUTME: Server binary for the calorie estimation HTTP API
// ABOUTME: Loads configuration, initializes logging, and runs the axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie API Server Binary
//!
//! Starts the HTTP API exposing `POST /calculate-calories`.

use anyhow::Result;
use calorie_api::{config::ServerConfig, logging, server};
use clap::Parser;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment
#[derive(Parser)]
#[command(name = "calorie-api-server")]
#[command(about = "Calorie API - daily calorie requirement estimation over HTTP")]
#[command(version)]
pub struct Args {
    /// Override bind address (default from HOST)
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port (default from HTTP_PORT)
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env(config.log_level)?;

    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Calculate Calories: POST http://{host}:{port}/calculate-calories");
    info!("   Health Check:       GET  http://{host}:{port}/health");
    info!("   Readiness:          GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
