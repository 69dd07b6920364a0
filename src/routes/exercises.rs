// ABOUTME: Exercise catalog route handlers with field-level validation
// ABOUTME: The admin pass-string promotes an exercise to the shared admin owner
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::errors::AppError;
use crate::models::{Exercise, Owner};
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

const NAME_REQUIRED: &str = "Name is required";
const NAME_SIZE: &str = "Name must be at most 32 characters";
const NO_MUSCLES: &str = "Exercise must have at least one muscle";
const WRONG_MUSCLES: &str = "Must choose valid muscles";
const NOTES_SIZE: &str = "Notes may be at most 200 characters";

/// Request body for exercise creation
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name, 1-32 characters
    pub name: Option<String>,
    /// Referenced muscle ids, at least one
    pub muscles: Option<Vec<String>>,
    /// Free-text notes, at most 200 characters
    pub notes: Option<String>,
    /// Admin pass-string: when it matches, the exercise is admin-owned
    #[serde(rename = "adminString")]
    pub admin_string: Option<String>,
}

/// Exercise route handlers
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create exercise catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", post(Self::handle_create_exercise))
            .route("/exercises", get(Self::handle_list_exercises))
            .with_state(resources)
    }

    async fn handle_create_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let mut errors = Map::new();

        let name = match request.name {
            None => {
                errors.insert("name".into(), Value::String(NAME_REQUIRED.into()));
                String::new()
            }
            Some(name) if name.is_empty() || name.chars().count() > 32 => {
                errors.insert("name".into(), Value::String(NAME_SIZE.into()));
                name
            }
            Some(name) => name,
        };

        let muscles = request.muscles.unwrap_or_default();
        let mut muscle_ids = Vec::with_capacity(muscles.len());
        if muscles.is_empty() {
            errors.insert("muscles".into(), Value::String(NO_MUSCLES.into()));
        } else {
            for muscle in &muscles {
                let known = match Uuid::parse_str(muscle) {
                    Ok(id) => {
                        muscle_ids.push(id);
                        resources
                            .database
                            .muscle_exists(id)
                            .await
                            .map_err(|e| AppError::database(e.to_string()))?
                    }
                    Err(_) => false,
                };
                if !known {
                    errors.insert("muscles".into(), Value::String(WRONG_MUSCLES.into()));
                }
            }
        }

        let notes = request.notes.unwrap_or_default();
        if notes.chars().count() > 200 {
            errors.insert("notes".into(), Value::String(NOTES_SIZE.into()));
        }

        if !errors.is_empty() {
            return Err(AppError::validation_errors(Value::Object(errors)));
        }

        let owner = if request.admin_string.as_deref() == Some(&resources.config.admin_string) {
            Owner::Admin
        } else {
            Owner::User(auth.id)
        };

        let exercise = Exercise::new(name, muscle_ids, notes, owner);
        resources
            .database
            .create_exercise(&exercise)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(exercise_id = %exercise.id, owner = %exercise.uid, "Exercise created");

        Ok(Json(serde_json::json!({ "message": "Created exercise" })).into_response())
    }

    async fn handle_list_exercises(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_middleware.authenticate(&headers).await?;

        let exercises = resources
            .database
            .get_exercises_visible_to(auth.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(serde_json::json!({ "exercises": exercises })).into_response())
    }
}
