// ABOUTME: Workout plan model: named ordered groups of prescribed sets
// ABOUTME: SetKind is the tagged exercise/rest sum type shared with logged workouts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prescribed or performed set.
///
/// Tagged on the wire by `type`: an `exercise` set carries `reps` and
/// `weight`, a `rest` set carries `duration` (seconds). The payloads are
/// mutually exclusive by construction; the plan validator additionally
/// rejects raw input that mixes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SetKind {
    /// An exercise effort
    Exercise {
        /// Repetition count
        #[serde(default)]
        reps: f64,
        /// Weight moved per repetition
        #[serde(default)]
        weight: f64,
    },
    /// A rest interval
    Rest {
        /// Rest length in seconds
        #[serde(default)]
        duration: f64,
    },
}

impl SetKind {
    /// Training volume contributed by this set (`weight × reps`, rest = 0).
    #[must_use]
    pub fn volume(&self) -> f64 {
        match self {
            Self::Exercise { reps, weight } => reps * weight,
            Self::Rest { .. } => 0.0,
        }
    }
}

/// One plan group: an exercise and its prescribed sets, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanGroup {
    /// Referenced catalog exercise
    #[serde(rename = "exerciseID")]
    pub exercise_id: Uuid,
    /// Prescribed sets, at least one
    pub sets: Vec<SetKind>,
}

/// A reusable workout plan authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Plan name, 1-100 characters
    pub name: String,
    /// Owning user
    #[serde(rename = "creatorID")]
    pub creator_id: Uuid,
    /// Ordered exercise groups, at least one
    pub groups: Vec<PlanGroup>,
}

impl Plan {
    /// Create a plan with a fresh identifier.
    #[must_use]
    pub fn new(name: String, creator_id: Uuid, groups: Vec<PlanGroup>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            creator_id,
            groups,
        }
    }
}
