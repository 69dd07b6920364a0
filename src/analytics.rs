// ABOUTME: Volume analytics: per-group training volume rate over time
// ABOUTME: Produces parallel x (group start, epoch ms) and y (volume per second) arrays
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Training-volume analytics over a user's logged workouts.

use crate::models::Workout;
use serde::Serialize;

/// A volume-rate time series as parallel arrays.
///
/// `x[i]` is the start time (epoch ms) of the i-th matching group, `y[i]` its
/// training volume divided by elapsed seconds. The arrays are always the same
/// length.
#[derive(Debug, Default, Serialize)]
pub struct VolumeSeries {
    /// Group start times, epoch milliseconds
    pub x: Vec<i64>,
    /// Volume per second for each group
    pub y: Vec<f64>,
}

/// Compute the `volpersec` series for one exercise across the given workouts.
///
/// Groups are visited in workout-then-group order. A group with no sets, or
/// whose last set ends at or before its first set starts, contributes nothing
/// (the division would be undefined); skipping keeps the arrays parallel.
#[must_use]
pub fn volume_per_second(workouts: &[Workout], exercise_id: &str) -> VolumeSeries {
    let mut series = VolumeSeries::default();

    for workout in workouts {
        for group in &workout.groups {
            if group.exercise_id.to_string() != exercise_id {
                continue;
            }
            let (Some(first), Some(last)) = (group.sets.first(), group.sets.last()) else {
                continue;
            };
            let elapsed_ms = last.end_time - first.start_time;
            if elapsed_ms <= 0 {
                continue;
            }
            let rate = group.volume() * 1000.0 / elapsed_ms as f64;
            series.x.push(first.start_time);
            series.y.push(rate);
        }
    }

    series
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{SetKind, WorkoutGroup, WorkoutSet};
    use uuid::Uuid;

    fn exercise_set(reps: f64, weight: f64, start: i64, end: i64) -> WorkoutSet {
        WorkoutSet {
            kind: SetKind::Exercise { reps, weight },
            start_time: start,
            end_time: end,
        }
    }

    fn rest_set(duration: f64, start: i64, end: i64) -> WorkoutSet {
        WorkoutSet {
            kind: SetKind::Rest { duration },
            start_time: start,
            end_time: end,
        }
    }

    fn workout(uid: Uuid, groups: Vec<WorkoutGroup>) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            plan_id: Uuid::new_v4(),
            uid,
            start_time: 0,
            end_time: 1,
            groups,
        }
    }

    #[test]
    fn computes_rate_from_volume_and_elapsed_seconds() {
        let exercise = Uuid::new_v4();
        let t = 1_612_000_000_000_i64;
        let group = WorkoutGroup {
            exercise_id: exercise,
            sets: vec![
                exercise_set(8.0, 40.0, t, t + 4_000),
                rest_set(60.0, t + 4_000, t + 8_000),
                exercise_set(6.0, 40.0, t + 8_000, t + 12_000),
            ],
        };
        let workouts = [workout(Uuid::new_v4(), vec![group])];

        let series = volume_per_second(&workouts, &exercise.to_string());
        assert_eq!(series.x, vec![t]);
        assert_eq!(series.y.len(), 1);
        // volume = 8*40 + 6*40 = 560 over 12 seconds
        assert!((series.y[0] - 560.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn filters_groups_by_exercise() {
        let wanted = Uuid::new_v4();
        let other = Uuid::new_v4();
        let groups = vec![
            WorkoutGroup {
                exercise_id: wanted,
                sets: vec![exercise_set(10.0, 55.0, 0, 6_000)],
            },
            WorkoutGroup {
                exercise_id: other,
                sets: vec![exercise_set(5.0, 100.0, 6_000, 12_000)],
            },
        ];
        let workouts = [workout(Uuid::new_v4(), groups)];

        let series = volume_per_second(&workouts, &wanted.to_string());
        assert_eq!(series.x.len(), 1);
        assert_eq!(series.y.len(), 1);
        assert!((series.y[0] - 550.0 / 6.0).abs() < 1e-9);

        // unmatched filter yields an empty series
        let empty = volume_per_second(&workouts, "fdwfeaf");
        assert!(empty.x.is_empty() && empty.y.is_empty());
    }

    #[test]
    fn zero_elapsed_and_empty_groups_are_skipped() {
        let exercise = Uuid::new_v4();
        let groups = vec![
            WorkoutGroup {
                exercise_id: exercise,
                sets: vec![exercise_set(8.0, 40.0, 5_000, 5_000)],
            },
            WorkoutGroup {
                exercise_id: exercise,
                sets: Vec::new(),
            },
            WorkoutGroup {
                exercise_id: exercise,
                sets: vec![exercise_set(8.0, 40.0, 10_000, 20_000)],
            },
        ];
        let workouts = [workout(Uuid::new_v4(), groups)];

        let series = volume_per_second(&workouts, &exercise.to_string());
        assert_eq!(series.x, vec![10_000]);
        assert_eq!(series.y.len(), 1);
        assert!((series.y[0] - 32.0).abs() < 1e-9);
    }

    #[test]
    fn groups_accumulate_across_workouts_in_order() {
        let exercise = Uuid::new_v4();
        let uid = Uuid::new_v4();
        let first = workout(
            uid,
            vec![WorkoutGroup {
                exercise_id: exercise,
                sets: vec![exercise_set(8.0, 40.0, 1_000, 7_000)],
            }],
        );
        let second = workout(
            uid,
            vec![WorkoutGroup {
                exercise_id: exercise,
                sets: vec![exercise_set(6.0, 40.0, 100_000, 106_000)],
            }],
        );

        let series = volume_per_second(&[first, second], &exercise.to_string());
        assert_eq!(series.x, vec![1_000, 100_000]);
        assert_eq!(series.y.len(), 2);
    }
}
