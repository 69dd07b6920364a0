// ABOUTME: JWT session tokens, bcrypt password hashing, and activation token generation
// ABOUTME: AuthManager owns the signing secret and expiry policy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Authentication primitives.
//!
//! Session tokens are HS256 JWTs carried in the `x-auth-token` header.
//! Passwords are hashed with bcrypt off the async executor.

use crate::errors::{AppError, AppResult};
use crate::models::User;
use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for a user session
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at, epoch seconds
    pub iat: i64,
    /// Expiry, epoch seconds
    pub exp: i64,
}

/// Issues and verifies session tokens.
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl AuthManager {
    /// Create a manager from the shared signing secret.
    #[must_use]
    pub fn new(jwt_secret: &[u8], expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret),
            decoding_key: DecodingKey::from_secret(jwt_secret),
            expiry_hours,
        }
    }

    /// Generate a session token for the user.
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a session token and return the user id it names.
    ///
    /// Any defect (bad signature, expired, malformed subject) collapses to
    /// `Not authenticated`; callers never learn why a token was rejected.
    pub fn validate_token(&self, token: &str) -> AppResult<Uuid> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token validation failed: {e}");
            AppError::not_authenticated()
        })?;
        Uuid::parse_str(&data.claims.sub).map_err(|_| AppError::not_authenticated())
    }
}

/// Hash a password with bcrypt on a blocking thread.
pub async fn hash_password(password: String) -> Result<String> {
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;
    Ok(hash)
}

/// Verify a password against a bcrypt hash on a blocking thread.
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(ok)
}

/// Generate a random activation token (32 hex chars).
#[must_use]
pub fn generate_activation_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
