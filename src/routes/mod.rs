// ABOUTME: Route module organization for the ironlog HTTP surface
// ABOUTME: One module per domain, composed into the /api/1.0 router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! HTTP routes organized by domain.
//!
//! Each module exposes a `*Routes` struct whose `routes()` builds an axum
//! `Router` over [`ServerResources`]; handlers stay thin and delegate to the
//! validators, the analytics engine, and the database.

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Signup, activation and signin routes
pub mod auth;
/// Volume analytics routes
pub mod data;
/// Exercise catalog routes
pub mod exercises;
/// Health check routes
pub mod health;
/// Muscle taxonomy routes
pub mod muscles;
/// Workout plan routes
pub mod plans;
/// Logged workout routes
pub mod workouts;

pub use auth::AuthRoutes;
pub use data::DataRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use muscles::MuscleRoutes;
pub use plans::PlanRoutes;
pub use workouts::WorkoutRoutes;

/// API version prefix shared by all domain routes.
pub const API_PREFIX: &str = "/api/1.0";

/// Compose the complete application router.
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    let api = Router::new()
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(MuscleRoutes::routes(resources.clone()))
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources.clone()))
        .merge(DataRoutes::routes(resources.clone()));

    Router::new()
        .nest(API_PREFIX, api)
        .merge(HealthRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
