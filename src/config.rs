// ABOUTME: Environment-driven server configuration with sane development defaults
// ABOUTME: Single ServerConfig struct loaded once at startup and shared via Arc
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Server configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};

/// Runtime configuration for the ironlog server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection URL (sqlite)
    pub database_url: String,
    /// Secret for signing JWT session tokens
    pub jwt_secret: String,
    /// JWT expiry in hours
    pub jwt_expiry_hours: i64,
    /// Pass-string authorizing muscle creation and admin-owned exercises
    pub admin_string: String,
    /// Comma-separated CORS origin allowlist, "*" for any
    pub cors_allowed_origins: String,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
}

fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", "8081")
                .parse()
                .context("Invalid HTTP_PORT value")?,
            database_url: env_var_or("DATABASE_URL", "sqlite:data/ironlog.db"),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expiry_hours: env_var_or("JWT_EXPIRY_HOURS", "24")
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            admin_string: env::var("ADMIN_STRING").context("ADMIN_STRING must be set")?,
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            log_level: env_var_or("LOG_LEVEL", "info"),
        };

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8081,
            database_url: "sqlite::memory:".into(),
            jwt_secret: "development-only-secret".into(),
            jwt_expiry_hours: 24,
            admin_string: "development-only-admin-string".into(),
            cors_allowed_origins: "*".into(),
            log_level: "info".into(),
        }
    }
}
