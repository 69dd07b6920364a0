// ABOUTME: Analytics data route: per-exercise volume-per-second time series
// ABOUTME: Unknown series types and unknown exercises produce an empty series
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use crate::analytics::{self, VolumeSeries};
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the data endpoint
#[derive(Debug, Deserialize)]
pub struct DataQuery {
    /// Series type, currently only "volpersec"
    #[serde(rename = "type", default)]
    pub series_type: String,
    /// Exercise id the series is computed for
    #[serde(default)]
    pub exercise: String,
}

/// Analytics route handlers
pub struct DataRoutes;

impl DataRoutes {
    /// Create analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/data", get(Self::handle_get_data))
            .with_state(resources)
    }

    async fn handle_get_data(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<DataQuery>,
    ) -> Result<Response, AppError> {
        let auth = resources
            .auth_middleware
            .authenticate_active(&headers)
            .await?;

        let series = if query.series_type == "volpersec" {
            let workouts = resources
                .database
                .get_workouts_by_owner(auth.id)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            analytics::volume_per_second(&workouts, &query.exercise)
        } else {
            VolumeSeries::default()
        };

        tracing::debug!(
            user_id = %auth.id,
            series_type = %query.series_type,
            points = series.x.len(),
            "Data series computed"
        );

        Ok(Json(series).into_response())
    }
}
