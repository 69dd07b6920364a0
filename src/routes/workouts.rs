// ABOUTME: Workout logging route handlers: record sessions against a plan
// ABOUTME: Validation short-circuits in a fixed order so error precedence is stable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::validation::WorkoutValidator;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

/// Workout route handlers
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts", post(Self::handle_create_workout))
            .route("/workouts", get(Self::handle_list_workouts))
            .with_state(resources)
    }

    async fn handle_create_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let validator = WorkoutValidator::new(&resources.database);
        let workout = validator.validate(&body, auth.id).await?;

        resources
            .database
            .create_workout(&workout)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(workout_id = %workout.id, user_id = %auth.id, "Workout created");

        Ok(Json(serde_json::json!({ "message": "Workout created" })).into_response())
    }

    async fn handle_list_workouts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let workouts = resources
            .database
            .get_workouts_by_owner(auth.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(serde_json::json!({ "workouts": workouts })).into_response())
    }
}
