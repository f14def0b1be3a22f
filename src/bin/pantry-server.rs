// ABOUTME: Server binary for the pantry recipe suggestion API
// ABOUTME: Loads environment configuration, applies CLI overrides, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pantry Server Binary
//!
//! Starts the HTTP API behind the restaurant website's ingredient search.

use anyhow::Result;
use clap::Parser;
use pantry_server::{config::environment::ServerConfig, logging::LoggingConfig, server};
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry API - recipe suggestions from the ingredients you have")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting Pantry API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Recipes:");
    info!("   Find Recipes:      POST http://{host}:{port}/api/find-recipes");
    info!("   Recipe Details:    GET  http://{host}:{port}/api/recipe-details?id={{id}}");
    info!("   Recipe by ID:      GET  http://{host}:{port}/api/recipes/{{id}}");
    info!("   List Recipes:      GET  http://{host}:{port}/api/recipes");
    info!("Legacy Website Paths:");
    info!("   Find Recipes:      POST http://{host}:{port}/php/find-recipes.php");
    info!("   Recipe Details:    GET  http://{host}:{port}/php/recipe-details.php?id={{id}}");
    info!("Health:");
    info!("   Liveness:          GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
