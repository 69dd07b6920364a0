// ABOUTME: Aggregated plan validation: one schema-and-reference pass, one consolidated error
// ABOUTME: Produces a normalized Plan tagged with the submitting user on success
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use super::ValidationError;
use crate::catalog::CatalogLookup;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Plan, PlanGroup};
use serde_json::Value;
use uuid::Uuid;

/// Maximum plan name length.
const MAX_NAME_LEN: usize = 100;

/// Validates submitted plans.
///
/// Every check is evaluated (no short-circuit) and any violation collapses to
/// the single `Invalid plan input` rejection.
pub struct PlanValidator<'a> {
    catalog: CatalogLookup<'a>,
}

impl<'a> PlanValidator<'a> {
    /// Build a validator over the exercise catalog.
    #[must_use]
    pub const fn new(database: &'a Database) -> Self {
        Self {
            catalog: CatalogLookup::new(database),
        }
    }

    /// Validate a submitted plan body and normalize it for the given creator.
    pub async fn validate(&self, body: &Value, creator_id: Uuid) -> AppResult<Plan> {
        let mut violations = schema_violations(body);

        // Referential pass: every group's exercise must resolve, any owner.
        if let Some(groups) = body.get("groups").and_then(Value::as_array) {
            for group in groups {
                let exercise_id = group
                    .get("exerciseID")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let exists = self
                    .catalog
                    .exercise_exists(exercise_id)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?;
                if !exists {
                    violations.push("unresolved exerciseID");
                }
            }
        }

        if !violations.is_empty() {
            tracing::debug!(?violations, "Plan rejected");
            return Err(ValidationError::InvalidPlanInput.into());
        }

        let name = body
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let groups: Vec<PlanGroup> = serde_json::from_value(body["groups"].clone())
            .map_err(|_| AppError::from(ValidationError::InvalidPlanInput))?;

        Ok(Plan::new(name, creator_id, groups))
    }
}

/// Structural checks over the raw body. Returns every violation found.
fn schema_violations(body: &Value) -> Vec<&'static str> {
    let mut violations = Vec::new();

    match body.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() && name.chars().count() <= MAX_NAME_LEN => {}
        _ => violations.push("name missing, empty or too long"),
    }

    let Some(groups) = body.get("groups").and_then(Value::as_array) else {
        violations.push("groups missing or not an array");
        return violations;
    };
    if groups.is_empty() {
        violations.push("groups empty");
    }

    for group in groups {
        if group.get("exerciseID").and_then(Value::as_str).is_none() {
            violations.push("group without exerciseID");
        }
        match group.get("sets").and_then(Value::as_array) {
            Some(sets) if !sets.is_empty() => {
                for set in sets {
                    violations.extend(set_violations(set));
                }
            }
            _ => violations.push("group without sets"),
        }
    }

    violations
}

/// Checks one set: type tag, payload exclusivity, numeric payloads.
fn set_violations(set: &Value) -> Vec<&'static str> {
    let mut violations = Vec::new();

    for field in ["reps", "weight", "duration"] {
        if let Some(value) = set.get(field) {
            if !value.is_null() && !value.is_number() {
                violations.push("non-numeric set field");
            }
        }
    }

    let has = |field: &str| set.get(field).is_some_and(|v| !v.is_null());

    match set.get("type").and_then(Value::as_str) {
        Some("exercise") => {
            if has("duration") {
                violations.push("exercise set carries duration");
            }
        }
        Some("rest") => {
            if has("reps") || has("weight") {
                violations.push("rest set carries reps or weight");
            }
        }
        _ => violations.push("set type missing or unknown"),
    }

    violations
}
