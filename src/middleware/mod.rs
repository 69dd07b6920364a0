// ABOUTME: Request middleware module organization
// ABOUTME: Holds the x-auth-token authentication middleware and CORS setup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Request middleware.

/// Token authentication and active-user checks
pub mod auth;
/// CORS configuration
pub mod cors;

pub use auth::{AuthMiddleware, AuthenticatedUser, AUTH_HEADER};
pub use cors::setup_cors;
