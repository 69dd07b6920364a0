// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides an in-memory app plus signup, activation, and seeding helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog
#![allow(
    dead_code,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `ironlog` integration tests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use ironlog::config::ServerConfig;
use ironlog::database::Database;
use ironlog::middleware::AUTH_HEADER;
use ironlog::models::{Exercise, Muscle, Owner};
use ironlog::resources::ServerResources;
use ironlog::routes;
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use tower::util::ServiceExt;
use uuid::Uuid;

/// Admin pass-string wired into every test app's configuration.
pub const TEST_ADMIN_STRING: &str = "test-admin-pass";

static INIT_LOGGER: Once = Once::new();

fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// A test application over an in-memory database.
pub struct TestApp {
    /// The composed router, cloned per request
    pub app: Router,
    /// Shared resources, for direct database access in assertions
    pub resources: Arc<ServerResources>,
}

/// Build an application backed by a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    init_test_logging();
    let database = Database::new("sqlite::memory:")
        .await
        .expect("in-memory database");
    database.migrate().await.expect("migrations");

    let config = ServerConfig {
        admin_string: TEST_ADMIN_STRING.into(),
        ..ServerConfig::default()
    };
    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::router(resources.clone());
    TestApp { app, resources }
}

/// A parsed response: status plus JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Send a request and parse the JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("/api/1.0{path}"))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, token);
        }
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("infallible service");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        TestResponse { status, body }
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, token, None).await
    }

    /// Send a GET to a path outside the versioned API prefix.
    pub async fn get_unversioned(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("infallible service");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        TestResponse { status, body }
    }

    /// Sign up a user and return their token. The account is not yet active.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/signup",
                None,
                json!({ "username": username, "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("signup token")
            .to_owned()
    }

    /// Activate the user behind a token using their stored activation token.
    pub async fn activate(&self, token: &str, email: &str) {
        let user = self
            .resources
            .database
            .get_user_by_email(email)
            .await
            .expect("user lookup")
            .expect("user exists");
        let activation = user.activation_token.expect("activation token");
        let response = self
            .post("/activate", Some(token), json!({ "token": activation }))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// Sign up and activate in one step.
    pub async fn signup_active(&self, username: &str, email: &str, password: &str) -> String {
        let token = self.signup(username, email, password).await;
        self.activate(&token, email).await;
        token
    }

    /// Seed a muscle directly into the database.
    pub async fn seed_muscle(&self, name: &str) -> Uuid {
        let muscle = Muscle::new(name.into());
        self.resources
            .database
            .create_muscle(&muscle)
            .await
            .expect("muscle insert");
        muscle.id
    }

    /// Seed an exercise directly into the database.
    pub async fn seed_exercise(&self, name: &str, muscle: Uuid, owner: Owner) -> Uuid {
        let exercise = Exercise::new(name.into(), vec![muscle], String::new(), owner);
        self.resources
            .database
            .create_exercise(&exercise)
            .await
            .expect("exercise insert");
        exercise.id
    }

    /// Create a one-group plan over the given exercise through the API.
    pub async fn create_plan(&self, token: &str, name: &str, exercise: Uuid) -> String {
        let response = self
            .post(
                "/plans",
                Some(token),
                json!({
                    "name": name,
                    "groups": [{
                        "exerciseID": exercise.to_string(),
                        "sets": [
                            { "type": "exercise", "reps": 8, "weight": 40 },
                            { "type": "rest", "duration": 60 },
                        ],
                    }],
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["plan"]["_id"]
            .as_str()
            .expect("plan id")
            .to_owned()
    }
}

/// Extract the user id encoded in a token, via the shared auth manager.
pub fn user_id_from(resources: &ServerResources, token: &str) -> Uuid {
    resources
        .auth_manager
        .validate_token(token)
        .expect("valid token")
}
