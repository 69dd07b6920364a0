// ABOUTME: Logged workout model: a plan reference plus timed groups and sets
// ABOUTME: Workout sets are prescribed sets with epoch-ms start/end timestamps attached
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use super::plan::SetKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed set with its recorded timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// What was performed (exercise effort or rest)
    #[serde(flatten)]
    pub kind: SetKind,
    /// When the set started, epoch milliseconds
    #[serde(rename = "startTime")]
    pub start_time: i64,
    /// When the set ended, epoch milliseconds
    #[serde(rename = "endTime")]
    pub end_time: i64,
}

/// One performed group: an exercise and its timed sets, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutGroup {
    /// Referenced catalog exercise
    #[serde(rename = "exerciseID")]
    pub exercise_id: Uuid,
    /// Performed sets in execution order
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutGroup {
    /// Training volume over this group's exercise-type sets.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(|set| set.kind.volume()).sum()
    }
}

/// A logged workout session. Read-only once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// The plan this session was performed from
    #[serde(rename = "planID")]
    pub plan_id: Uuid,
    /// Owning user
    pub uid: Uuid,
    /// Session start, epoch milliseconds
    #[serde(rename = "startTime")]
    pub start_time: i64,
    /// Session end, epoch milliseconds
    #[serde(rename = "endTime")]
    pub end_time: i64,
    /// Performed groups in execution order
    pub groups: Vec<WorkoutGroup>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn workout_set_flattens_kind_on_the_wire() {
        let set = WorkoutSet {
            kind: SetKind::Exercise {
                reps: 6.0,
                weight: 40.0,
            },
            start_time: 1000,
            end_time: 7000,
        };
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["type"], "exercise");
        assert_eq!(value["reps"], 6.0);
        assert_eq!(value["startTime"], 1000);

        let back: WorkoutSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, set);
    }
}
