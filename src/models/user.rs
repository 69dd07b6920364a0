// ABOUTME: User account model with activation state
// ABOUTME: Accounts start inactive and hold a one-shot activation token
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user account.
///
/// Never serialized to the wire directly; the password hash and activation
/// token stay server-side.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display/login name, 4-32 characters
    pub username: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// False until the activation token has been redeemed
    pub active: bool,
    /// One-shot activation token, cleared on activation
    pub activation_token: Option<String>,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, inactive user with a pending activation token.
    #[must_use]
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        activation_token: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            active: false,
            activation_token: Some(activation_token),
            created_at: Utc::now(),
        }
    }
}
