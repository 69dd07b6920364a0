// ABOUTME: Integration tests for workout logging routes
// ABOUTME: Exercises the ordered validation pipeline and its error precedence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use ironlog::models::Owner;
use serde_json::{json, Value};
use uuid::Uuid;

/// One valid two-set group over the given exercise, starting at epoch ms `t`.
fn group(exercise: Uuid, t: i64) -> Value {
    json!({
        "exerciseID": exercise.to_string(),
        "sets": [
            { "type": "exercise", "reps": 8, "weight": 40, "startTime": t, "endTime": t + 4_000 },
            { "type": "rest", "duration": 60, "startTime": t + 4_000, "endTime": t + 8_000 },
        ],
    })
}

fn workout_body(plan_id: &str, exercise: Uuid, t: i64) -> Value {
    json!({
        "planID": plan_id,
        "startTime": t,
        "endTime": t + 10_000,
        "groups": [group(exercise, t)],
    })
}

struct Setup {
    app: common::TestApp,
    token: String,
    exercise: Uuid,
    plan_id: String,
}

async fn setup() -> Setup {
    let app = common::spawn_app().await;
    let token = app.signup_active("user1", "user1@mail.com", "Password1").await;
    let muscle = app.seed_muscle("Biceps").await;
    let exercise = app.seed_exercise("Curls", muscle, Owner::Admin).await;
    let plan_id = app.create_plan(&token, "Plan", exercise).await;
    Setup {
        app,
        token,
        exercise,
        plan_id,
    }
}

#[tokio::test]
async fn creates_workout_for_valid_body() {
    let s = setup().await;
    let response = s
        .app
        .post(
            "/workouts",
            Some(&s.token),
            workout_body(&s.plan_id, s.exercise, 1_612_000_000_000),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["message"], "Workout created");

    let response = s.app.get("/workouts", Some(&s.token)).await;
    let workouts = response.body["workouts"].as_array().expect("array");
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["planID"], s.plan_id);
    assert_eq!(workouts[0]["groups"][0]["exerciseID"], s.exercise.to_string());
}

#[tokio::test]
async fn malformed_body_is_invalid_workout_input() {
    let s = setup().await;
    let bodies = [
        json!({}),
        json!({ "planID": s.plan_id, "startTime": "soon", "endTime": 2, "groups": [] }),
        json!({ "planID": "", "startTime": 1, "endTime": 2, "groups": [group(s.exercise, 1)] }),
    ];
    for body in bodies {
        let response = s.app.post("/workouts", Some(&s.token), body.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["message"], "Invalid workout input", "{body}");
    }
}

#[tokio::test]
async fn unknown_exercise_is_rejected_before_times() {
    let s = setup().await;
    let t = 1_000;
    // the group also carries a broken time range, the exercise check wins
    let body = json!({
        "planID": s.plan_id,
        "startTime": t,
        "endTime": t - 1,
        "groups": [{
            "exerciseID": Uuid::new_v4().to_string(),
            "sets": [{ "type": "rest", "duration": 60, "startTime": t, "endTime": t - 1 }],
        }],
    });

    let response = s.app.post("/workouts", Some(&s.token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid exercise");
}

#[tokio::test]
async fn another_users_exercise_is_invalid() {
    let s = setup().await;
    let other = s
        .app
        .signup_active("user2", "user2@mail.com", "Password1")
        .await;
    let other_id = common::user_id_from(&s.app.resources, &other);
    let muscle = s.app.seed_muscle("Triceps").await;
    let private = s
        .app
        .seed_exercise("Private", muscle, Owner::User(other_id))
        .await;

    let response = s
        .app
        .post(
            "/workouts",
            Some(&s.token),
            workout_body(&s.plan_id, private, 1_000),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid exercise");
}

#[tokio::test]
async fn set_chronology_is_enforced() {
    let s = setup().await;
    let t = 10_000;

    // set ends before it starts
    let body = json!({
        "planID": s.plan_id,
        "startTime": t,
        "endTime": t + 20_000,
        "groups": [{
            "exerciseID": s.exercise.to_string(),
            "sets": [{ "type": "rest", "duration": 60, "startTime": t + 5_000, "endTime": t + 1_000 }],
        }],
    });
    let response = s.app.post("/workouts", Some(&s.token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid time input");

    // second set starts before the first one
    let body = json!({
        "planID": s.plan_id,
        "startTime": t,
        "endTime": t + 20_000,
        "groups": [{
            "exerciseID": s.exercise.to_string(),
            "sets": [
                { "type": "exercise", "reps": 8, "weight": 40, "startTime": t + 5_000, "endTime": t + 6_000 },
                { "type": "rest", "duration": 60, "startTime": t + 1_000, "endTime": t + 7_000 },
            ],
        }],
    });
    let response = s.app.post("/workouts", Some(&s.token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid time input");
}

#[tokio::test]
async fn chronology_is_checked_across_groups() {
    let s = setup().await;
    let t = 10_000;
    let body = json!({
        "planID": s.plan_id,
        "startTime": t,
        "endTime": t + 100_000,
        "groups": [group(s.exercise, t + 50_000), group(s.exercise, t)],
    });

    let response = s.app.post("/workouts", Some(&s.token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid time input");
}

#[tokio::test]
async fn unknown_plan_is_rejected_after_times() {
    let s = setup().await;
    let response = s
        .app
        .post(
            "/workouts",
            Some(&s.token),
            workout_body(&Uuid::new_v4().to_string(), s.exercise, 1_000),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid plan");
}

#[tokio::test]
async fn overall_range_must_be_forward() {
    let s = setup().await;
    let t = 10_000;
    let body = json!({
        "planID": s.plan_id,
        "startTime": t + 50_000,
        "endTime": t,
        "groups": [group(s.exercise, t)],
    });

    let response = s.app.post("/workouts", Some(&s.token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid time input");
}

#[tokio::test]
async fn listing_is_per_user() {
    let s = setup().await;
    let other = s
        .app
        .signup_active("user2", "user2@mail.com", "Password1")
        .await;
    let other_plan = s.app.create_plan(&other, "Their plan", s.exercise).await;

    let response = s
        .app
        .post(
            "/workouts",
            Some(&s.token),
            workout_body(&s.plan_id, s.exercise, 1_000),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let response = s
        .app
        .post(
            "/workouts",
            Some(&other),
            workout_body(&other_plan, s.exercise, 1_000),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = s.app.get("/workouts", Some(&s.token)).await;
    let workouts = response.body["workouts"].as_array().expect("array");
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["planID"], s.plan_id);
}
