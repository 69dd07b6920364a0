// ABOUTME: Server binary: loads configuration, opens the database, serves HTTP
// ABOUTME: All state lives in ServerResources shared across the axum router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! # ironlog server binary
//!
//! Starts the workout tracking API: loads configuration from the environment,
//! runs database migrations, and serves the `/api/1.0` routes over HTTP.

use anyhow::Result;
use clap::Parser;
use ironlog::{config::ServerConfig, database::Database, logging, resources::ServerResources, routes};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "ironlog-server")]
#[command(about = "ironlog - workout tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_logging(&config.log_level)?;

    info!("Starting ironlog API server");
    info!(port = config.http_port, database = %config.database_url, "Configuration loaded");

    let database = Database::new(&config.database_url).await?;
    database.migrate().await?;
    info!("Database ready");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::router(resources.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "Listening for HTTP connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    resources.database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
