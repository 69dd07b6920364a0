// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Shares database, auth manager and middleware across route handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Shared server resources.
//!
//! One container built at startup and handed to every router as axum state,
//! so expensive objects are constructed once and shared via `Arc`.

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::AuthMiddleware;
use std::sync::Arc;

/// Centralized resource container for dependency injection.
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence layer
    pub database: Arc<Database>,
    /// JWT issue/verify
    pub auth_manager: Arc<AuthManager>,
    /// Request authentication
    pub auth_middleware: AuthMiddleware,
    /// Runtime configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire up shared resources.
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let database = Arc::new(database);
        let auth_manager = Arc::new(AuthManager::new(
            config.jwt_secret.as_bytes(),
            config.jwt_expiry_hours,
        ));
        let auth_middleware = AuthMiddleware::new(auth_manager.clone(), database.clone());
        Self {
            database,
            auth_manager,
            auth_middleware,
            config: Arc::new(config),
        }
    }
}
