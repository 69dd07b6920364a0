// ABOUTME: Crate root for the ironlog workout tracking backend
// ABOUTME: Wires models, validators, analytics, and HTTP routes together
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! # ironlog
//!
//! A workout tracking backend. Users sign up, activate their account, browse
//! a muscle and exercise catalog, author training plans, log workouts against
//! those plans, and query volume-per-second analytics over what they logged.
//!
//! The crate is organized around three layers:
//!
//! - [`models`] and [`database`]: the persisted entities and their SQLite store
//! - [`validation`] and [`analytics`]: the domain rules for plans, workouts,
//!   and the `volpersec` series
//! - [`routes`]: the axum HTTP surface under `/api/1.0`, authenticated via a
//!   JWT carried in the `x-auth-token` header

/// Volume-per-second analytics over logged workouts
pub mod analytics;
/// JWT issuance and password hashing
pub mod auth;
/// Read-only exercise and plan reference resolution
pub mod catalog;
/// Environment-driven server configuration
pub mod config;
/// SQLite persistence layer
pub mod database;
/// Error types and HTTP error responses
pub mod errors;
/// Tracing setup
pub mod logging;
/// Request authentication middleware
pub mod middleware;
/// Persisted entity types
pub mod models;
/// Shared server dependency container
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// Plan and workout validators
pub mod validation;
