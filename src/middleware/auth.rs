// ABOUTME: Authentication middleware resolving the x-auth-token header to a user
// ABOUTME: Distinguishes "not authenticated" (401) from "user inactive" (403)
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::auth::AuthManager;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use axum::http::HeaderMap;
use std::sync::Arc;
use uuid::Uuid;

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// The resolved identity of an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User id
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Whether the account has been activated
    pub active: bool,
}

/// Authenticates requests from the `x-auth-token` header.
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: Arc<AuthManager>,
    database: Arc<Database>,
}

impl AuthMiddleware {
    /// Create new auth middleware.
    #[must_use]
    pub fn new(auth_manager: Arc<AuthManager>, database: Arc<Database>) -> Self {
        Self {
            auth_manager,
            database,
        }
    }

    /// Authenticate a request and load the current user.
    ///
    /// A missing header, an unverifiable token, or a token naming a deleted
    /// user all yield 401 `Not authenticated`.
    pub async fn authenticate(&self, headers: &HeaderMap) -> AppResult<AuthenticatedUser> {
        let token = headers
            .get(AUTH_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::debug!("Authentication failed: missing {AUTH_HEADER} header");
                AppError::not_authenticated()
            })?;

        let user_id = self.auth_manager.validate_token(token)?;

        let user = self
            .database
            .get_user(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(%user_id, "Authenticated token names an unknown user");
                AppError::not_authenticated()
            })?;

        tracing::debug!(user_id = %user.id, active = user.active, "Request authenticated");

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username,
            email: user.email,
            active: user.active,
        })
    }

    /// Authenticate and additionally require an activated account.
    pub async fn authenticate_active(&self, headers: &HeaderMap) -> AppResult<AuthenticatedUser> {
        let user = self.authenticate(headers).await?;
        if !user.active {
            return Err(AppError::user_inactive());
        }
        Ok(user)
    }
}
