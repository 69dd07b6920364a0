// ABOUTME: Signup, activation and signin route handlers
// ABOUTME: Issues JWT session tokens and drives the inactive-until-activated lifecycle
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::auth::{generate_activation_token, hash_password, verify_password};
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Login name, 4-32 characters
    pub username: String,
    /// Email address
    pub email: String,
    /// Plaintext password, 6-100 characters
    pub password: String,
}

/// Request body for account activation
#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    /// The activation token delivered out of band
    pub token: String,
}

/// Request body for signin
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Authentication route handlers
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create signup/activate/signin routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/signup", post(Self::handle_signup))
            .route("/activate", post(Self::handle_activate))
            .route("/signin", post(Self::handle_signin))
            .with_state(resources)
    }

    async fn handle_signup(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SignupRequest>,
    ) -> Result<Response, AppError> {
        validate_signup(&request)?;

        if resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .is_some()
        {
            return Err(AppError::invalid_input("E-mail in use"));
        }

        let password_hash = hash_password(request.password).await?;
        let user = User::new(
            request.username,
            request.email,
            password_hash,
            generate_activation_token(),
        );
        resources
            .database
            .create_user(&user)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let token = resources.auth_manager.generate_token(&user)?;
        tracing::info!(user_id = %user.id, "User created");

        Ok(Json(serde_json::json!({ "message": "User created", "token": token })).into_response())
    }

    async fn handle_activate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ActivateRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_middleware.authenticate(&headers).await?;

        let user = resources
            .database
            .get_user(auth.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(AppError::not_authenticated)?;

        if user.activation_token.as_deref() != Some(request.token.as_str()) {
            return Err(AppError::invalid_input("Invalid activation token"));
        }

        resources
            .database
            .activate_user(user.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(user_id = %user.id, "User activated");

        Ok(Json(serde_json::json!({ "message": "User activated" })).into_response())
    }

    async fn handle_signin(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SigninRequest>,
    ) -> Result<Response, AppError> {
        let invalid = || AppError::new(crate::errors::ErrorCode::NotAuthenticated, "Invalid credentials");

        let user = resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(invalid)?;

        let ok = verify_password(request.password, user.password_hash.clone()).await?;
        if !ok {
            tracing::warn!(user_id = %user.id, "Signin with wrong password");
            return Err(invalid());
        }

        let token = resources.auth_manager.generate_token(&user)?;
        tracing::info!(user_id = %user.id, "User signed in");

        Ok(Json(serde_json::json!({ "message": "Signed in", "token": token })).into_response())
    }
}

fn validate_signup(request: &SignupRequest) -> AppResult<()> {
    let username_len = request.username.chars().count();
    let password_len = request.password.chars().count();
    let email_ok = request.email.contains('@') && !request.email.starts_with('@');

    if (4..=32).contains(&username_len) && (6..=100).contains(&password_len) && email_ok {
        Ok(())
    } else {
        Err(AppError::invalid_input("Invalid user input"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn signup_field_bounds() {
        assert!(validate_signup(&request("user1", "user1@mail.com", "Password1")).is_ok());
        assert!(validate_signup(&request("abc", "user1@mail.com", "Password1")).is_err());
        assert!(validate_signup(&request(&"a".repeat(33), "u@mail.com", "Password1")).is_err());
        assert!(validate_signup(&request("user1", "no-at-sign", "Password1")).is_err());
        assert!(validate_signup(&request("user1", "u@mail.com", "short")).is_err());
    }
}
