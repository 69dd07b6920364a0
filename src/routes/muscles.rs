// ABOUTME: Muscle taxonomy route handlers
// ABOUTME: Creation is guarded by the admin pass-string, listing is public
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::errors::AppError;
use crate::models::Muscle;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for muscle creation
#[derive(Debug, Deserialize)]
pub struct CreateMuscleRequest {
    /// Admin pass-string
    pub string: String,
    /// The muscle to create
    pub muscle: MuscleBody,
}

/// Nested muscle payload
#[derive(Debug, Deserialize)]
pub struct MuscleBody {
    /// Display name
    pub name: String,
}

/// Muscle route handlers
pub struct MuscleRoutes;

impl MuscleRoutes {
    /// Create muscle taxonomy routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/muscles", post(Self::handle_create_muscle))
            .route("/muscles", get(Self::handle_list_muscles))
            .with_state(resources)
    }

    async fn handle_create_muscle(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateMuscleRequest>,
    ) -> Result<Response, AppError> {
        if request.muscle.name.is_empty() {
            return Err(AppError::invalid_input("Invalid muscle input"));
        }
        if request.string != resources.config.admin_string {
            tracing::warn!("Muscle creation attempted with a wrong pass-string");
            return Err(AppError::not_authorized());
        }

        let muscle = Muscle::new(request.muscle.name);
        resources
            .database
            .create_muscle(&muscle)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(muscle_id = %muscle.id, name = %muscle.name, "Muscle created");

        Ok(Json(serde_json::json!({ "message": "Muscle created" })).into_response())
    }

    async fn handle_list_muscles(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let muscles = resources
            .database
            .get_muscles()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(Json(serde_json::json!({ "muscles": muscles })).into_response())
    }
}
