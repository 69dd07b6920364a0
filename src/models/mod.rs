// ABOUTME: Domain model module organization for ironlog entities
// ABOUTME: Splits user, catalog (muscle/exercise), plan, and workout types by domain
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Domain models.
//!
//! Wire field names follow the original API surface (`_id`, `exerciseID`,
//! `planID`, `uid`, `startTime`, `endTime`) so existing clients keep working.

/// Muscle and exercise catalog types, including the owner sentinel
pub mod catalog;
/// Workout plan types (prescribed groups and sets)
pub mod plan;
/// User account type
pub mod user;
/// Logged workout types (timed groups and sets)
pub mod workout;

pub use catalog::{Exercise, Muscle, Owner};
pub use plan::{Plan, PlanGroup, SetKind};
pub use user::User;
pub use workout::{Workout, WorkoutGroup, WorkoutSet};
