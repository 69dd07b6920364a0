// ABOUTME: Ordered workout validation pipeline with fixed error precedence
// ABOUTME: schema, then exercise refs, then chronology, then plan ref, then overall times
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use super::ValidationError;
use crate::catalog::CatalogLookup;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutGroup, WorkoutSet};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Maximum length for plan and exercise identifiers on the wire.
const MAX_ID_LEN: usize = 40;

/// Deserialized workout submission, before referential and temporal checks.
#[derive(Debug, Deserialize)]
struct WorkoutPayload {
    #[serde(rename = "planID")]
    plan_id: String,
    #[serde(rename = "startTime")]
    start_time: i64,
    #[serde(rename = "endTime")]
    end_time: i64,
    groups: Vec<GroupPayload>,
}

#[derive(Debug, Deserialize)]
struct GroupPayload {
    #[serde(rename = "exerciseID")]
    exercise_id: String,
    sets: Vec<WorkoutSet>,
}

/// Validates submitted workouts.
///
/// The pipeline short-circuits: the first failing step decides the error, so
/// an exercise violation is always reported before a time violation, which is
/// reported before a dangling plan reference. Overall session ordering is the
/// last check of the time class.
pub struct WorkoutValidator<'a> {
    catalog: CatalogLookup<'a>,
}

impl<'a> WorkoutValidator<'a> {
    /// Build a validator over the exercise and plan catalog.
    #[must_use]
    pub const fn new(database: &'a Database) -> Self {
        Self {
            catalog: CatalogLookup::new(database),
        }
    }

    /// Validate a submitted workout body for the given user.
    pub async fn validate(&self, body: &Value, user_id: Uuid) -> AppResult<Workout> {
        // Step 1: structural schema.
        let payload = parse_payload(body)?;

        // Step 2: every group's exercise must be admin-owned or user-owned.
        let owned = self
            .catalog
            .exercises_owned_by_admin_or_user(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if payload
            .groups
            .iter()
            .any(|group| !owned.contains(&group.exercise_id))
        {
            return Err(ValidationError::InvalidExercise.into());
        }

        // Step 3: per-set and global chronology over the flattened sequence.
        let flattened = flattened_sets(&payload.groups);
        if !chronology_holds(&flattened) {
            return Err(ValidationError::InvalidTimeInput.into());
        }

        // Step 4: the referenced plan must exist.
        let plan_ok = self
            .catalog
            .plan_exists(&payload.plan_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if !plan_ok {
            return Err(ValidationError::InvalidPlanReference.into());
        }

        // Step 5: overall session ordering, checked last of the time class.
        if payload.start_time >= payload.end_time {
            return Err(ValidationError::InvalidTimeInput.into());
        }

        build_workout(payload, user_id)
    }
}

/// Step 1: deserialize and enforce lengths. Any defect is one schema error.
fn parse_payload(body: &Value) -> Result<WorkoutPayload, ValidationError> {
    let payload: WorkoutPayload =
        serde_json::from_value(body.clone()).map_err(|_| ValidationError::InvalidWorkoutInput)?;

    if payload.plan_id.is_empty() || payload.plan_id.len() > MAX_ID_LEN {
        return Err(ValidationError::InvalidWorkoutInput);
    }
    if payload
        .groups
        .iter()
        .any(|g| g.exercise_id.is_empty() || g.exercise_id.len() > MAX_ID_LEN)
    {
        return Err(ValidationError::InvalidWorkoutInput);
    }

    Ok(payload)
}

/// The explicit group-order-then-set-order sequence the chronology invariant
/// is stated over.
fn flattened_sets(groups: &[GroupPayload]) -> Vec<&WorkoutSet> {
    groups.iter().flat_map(|group| group.sets.iter()).collect()
}

/// Every set starts before it ends, and start times strictly increase across
/// the flattened sequence.
fn chronology_holds(sets: &[&WorkoutSet]) -> bool {
    for (index, set) in sets.iter().enumerate() {
        if set.start_time >= set.end_time {
            return false;
        }
        if index > 0 && set.start_time <= sets[index - 1].start_time {
            return false;
        }
    }
    true
}

fn build_workout(payload: WorkoutPayload, user_id: Uuid) -> AppResult<Workout> {
    // Both ids were resolved against the catalog, so they parse.
    let plan_id = Uuid::parse_str(&payload.plan_id)
        .map_err(|_| AppError::from(ValidationError::InvalidPlanReference))?;
    let groups = payload
        .groups
        .into_iter()
        .map(|group| {
            Ok(WorkoutGroup {
                exercise_id: Uuid::parse_str(&group.exercise_id)
                    .map_err(|_| AppError::from(ValidationError::InvalidExercise))?,
                sets: group.sets,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Workout {
        id: Uuid::new_v4(),
        plan_id,
        uid: user_id,
        start_time: payload.start_time,
        end_time: payload.end_time,
        groups,
    })
}
