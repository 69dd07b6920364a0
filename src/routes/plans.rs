// ABOUTME: Training plan route handlers: create, list, and owner-only edit
// ABOUTME: Bodies are validated as raw JSON so every violation is aggregated
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::validation::{PlanValidator, ValidationError};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Training plan route handlers
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/plans", post(Self::handle_create_plan))
            .route("/plans", get(Self::handle_list_plans))
            .route("/plans/:plan_id", put(Self::handle_edit_plan))
            .with_state(resources)
    }

    async fn handle_create_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let validator = PlanValidator::new(&resources.database);
        let plan = validator.validate(&body, auth.id).await?;

        resources
            .database
            .create_plan(&plan)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(plan_id = %plan.id, user_id = %auth.id, "Plan created");

        Ok(Json(serde_json::json!({ "message": "Plan created", "plan": plan })).into_response())
    }

    async fn handle_list_plans(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let plans = resources
            .database
            .get_plans_by_creator(auth.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(serde_json::json!({ "plans": plans })).into_response())
    }

    async fn handle_edit_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<String>,
        Json(body): Json<Value>,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        // A malformed id is indistinguishable from a missing plan.
        let existing = match Uuid::parse_str(&plan_id) {
            Ok(id) => resources
                .database
                .get_plan(id)
                .await
                .map_err(|e| AppError::database(e.to_string()))?,
            Err(_) => None,
        };
        let Some(existing) = existing else {
            return Err(ValidationError::InvalidPlanReference.into());
        };
        if existing.creator_id != auth.id {
            return Err(AppError::not_authorized());
        }

        let validator = PlanValidator::new(&resources.database);
        let mut plan = validator.validate(&body, auth.id).await?;
        plan.id = existing.id;

        resources
            .database
            .update_plan(&plan)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::info!(plan_id = %plan.id, user_id = %auth.id, "Plan edited");

        Ok(Json(serde_json::json!({ "message": "Plan edited", "plan": plan })).into_response())
    }
}
