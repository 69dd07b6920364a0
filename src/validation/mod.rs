// ABOUTME: Validation module: aggregated plan checks and the ordered workout pipeline
// ABOUTME: ValidationError carries the exact wire message for each rejection class
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Plan and workout validation.
//!
//! The two validators deliberately differ in shape: the plan validator
//! evaluates every check and reports one consolidated failure, while the
//! workout validator is an ordered pipeline that returns on the first
//! failing class (exercise references before chronology before the plan
//! reference). The asymmetry is part of the API contract.

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Aggregated plan validation
pub mod plan;
/// Ordered workout validation pipeline
pub mod workout;

pub use plan::PlanValidator;
pub use workout::WorkoutValidator;

/// Rejection classes produced by the validators.
///
/// The display strings are the wire messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Plan schema or referential violation (aggregated, one message)
    #[error("Invalid plan input")]
    InvalidPlanInput,
    /// Workout schema violation
    #[error("Invalid workout input")]
    InvalidWorkoutInput,
    /// Workout group references an exercise outside admin ∪ submitter
    #[error("Invalid exercise")]
    InvalidExercise,
    /// Chronological invariant violated
    #[error("Invalid time input")]
    InvalidTimeInput,
    /// Workout references a plan that does not exist
    #[error("Invalid plan")]
    InvalidPlanReference,
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::InvalidPlanInput | ValidationError::InvalidWorkoutInput => {
                ErrorCode::InvalidInput
            }
            ValidationError::InvalidExercise | ValidationError::InvalidPlanReference => {
                ErrorCode::InvalidReference
            }
            ValidationError::InvalidTimeInput => ErrorCode::InvalidTime,
        };
        Self::new(code, error.to_string())
    }
}
