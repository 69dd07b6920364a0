// ABOUTME: Catalog lookup: resolves exercise and plan references for the validators
// ABOUTME: Malformed identifiers are treated as "not found", never as errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Read-only lookups against the exercise and plan collaborators.

use crate::database::Database;
use anyhow::Result;
use std::collections::HashSet;
use uuid::Uuid;

/// Side-effect-free reference resolution used by the plan and workout
/// validators. All lookups treat a malformed id as a miss.
#[derive(Clone)]
pub struct CatalogLookup<'a> {
    database: &'a Database,
}

impl<'a> CatalogLookup<'a> {
    /// Wrap the database for lookups.
    #[must_use]
    pub const fn new(database: &'a Database) -> Self {
        Self { database }
    }

    /// True when the id names an existing exercise, regardless of owner.
    pub async fn exercise_exists(&self, exercise_id: &str) -> Result<bool> {
        let Ok(id) = Uuid::parse_str(exercise_id) else {
            return Ok(false);
        };
        Ok(self.database.get_exercise(id).await?.is_some())
    }

    /// Ids of every exercise owned by the admin sentinel or the given user.
    pub async fn exercises_owned_by_admin_or_user(&self, user_id: Uuid) -> Result<HashSet<String>> {
        let exercises = self.database.get_exercises_visible_to(user_id).await?;
        Ok(exercises.iter().map(|e| e.id.to_string()).collect())
    }

    /// True when the id names an existing plan.
    pub async fn plan_exists(&self, plan_id: &str) -> Result<bool> {
        let Ok(id) = Uuid::parse_str(plan_id) else {
            return Ok(false);
        };
        Ok(self.database.get_plan(id).await?.is_some())
    }
}
