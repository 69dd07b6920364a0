// ABOUTME: Integration tests for signup, activation, and signin routes
// ABOUTME: Covers field validation, duplicate e-mails, and the inactive gate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn signup_returns_token_for_valid_input() {
    let app = common::spawn_app().await;
    let response = app
        .post(
            "/signup",
            None,
            json!({ "username": "user1", "email": "user1@mail.com", "password": "Password1" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User created");
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn signup_rejects_invalid_fields() {
    let app = common::spawn_app().await;
    for body in [
        json!({ "username": "abc", "email": "u@mail.com", "password": "Password1" }),
        json!({ "username": "user1", "email": "no-at-sign", "password": "Password1" }),
        json!({ "username": "user1", "email": "u@mail.com", "password": "short" }),
    ] {
        let response = app.post("/signup", None, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Invalid user input");
    }
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let app = common::spawn_app().await;
    app.signup("user1", "user1@mail.com", "Password1").await;

    let response = app
        .post(
            "/signup",
            None,
            json!({ "username": "user2", "email": "user1@mail.com", "password": "Password1" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "E-mail in use");
}

#[tokio::test]
async fn activation_requires_matching_token() {
    let app = common::spawn_app().await;
    let token = app.signup("user1", "user1@mail.com", "Password1").await;

    let response = app
        .post("/activate", Some(&token), json!({ "token": "wrong" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid activation token");

    app.activate(&token, "user1@mail.com").await;
}

#[tokio::test]
async fn inactive_user_cannot_use_protected_routes() {
    let app = common::spawn_app().await;
    let token = app.signup("user1", "user1@mail.com", "Password1").await;

    let response = app.get("/plans", Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "User inactive");
}

#[tokio::test]
async fn signin_returns_token_for_correct_credentials() {
    let app = common::spawn_app().await;
    app.signup("user1", "user1@mail.com", "Password1").await;

    let response = app
        .post(
            "/signin",
            None,
            json!({ "email": "user1@mail.com", "password": "Password1" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Signed in");
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn signin_rejects_wrong_password_and_unknown_email() {
    let app = common::spawn_app().await;
    app.signup("user1", "user1@mail.com", "Password1").await;

    for body in [
        json!({ "email": "user1@mail.com", "password": "WrongPass1" }),
        json!({ "email": "nobody@mail.com", "password": "Password1" }),
    ] {
        let response = app.post("/signin", None, body).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let app = common::spawn_app().await;

    let response = app.get("/plans", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authenticated");

    let response = app.get("/plans", Some("not-a-jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authenticated");
}
