// ABOUTME: SQLite persistence layer for users, muscles, exercises, plans and workouts
// ABOUTME: Nested group/set documents are stored as JSON TEXT columns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

//! Database layer built on sqlx.
//!
//! Plans and workouts are document-shaped: scalar columns for the fields the
//! queries filter on (owner, plan reference) and a JSON column for the nested
//! groups. Find-by-owner results carry no ordering guarantee.

use crate::models::{Exercise, Muscle, Owner, Plan, User, Workout};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Handle to the ironlog database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations.
    ///
    /// In-memory databases are pinned to a single pooled connection so the
    /// schema and data survive for the lifetime of the pool.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(database_url)
                .await?
        } else {
            // mode=rwc so SQLite creates the file on first run
            let connection_options = format!("{database_url}?mode=rwc");
            SqlitePoolOptions::new().connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Cheap connectivity probe, used by the readiness endpoint.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, releasing all connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 0,
                activation_token TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS muscles (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                muscles TEXT NOT NULL,
                notes TEXT NOT NULL,
                uid TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plans (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                creator_id TEXT NOT NULL,
                groups TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                plan_id TEXT NOT NULL,
                uid TEXT NOT NULL,
                start_time INTEGER NOT NULL,
                end_time INTEGER NOT NULL,
                groups TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ================================
    // Users
    // ================================

    /// Create a new user account.
    pub async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, email, password_hash, active, activation_token, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(i32::from(user.active))
        .bind(user.activation_token.as_deref())
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("failed to insert user")?;
        Ok(())
    }

    /// Get a user by id.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Get a user by email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Mark a user active and clear the activation token.
    pub async fn activate_user(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET active = 1, activation_token = NULL WHERE id = ?1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        Ok(User {
            id: Uuid::parse_str(&id)?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            active: row.try_get::<i64, _>("active")? != 0,
            activation_token: row.try_get("activation_token")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
        })
    }

    // ================================
    // Muscles
    // ================================

    /// Create a muscle in the global taxonomy.
    pub async fn create_muscle(&self, muscle: &Muscle) -> Result<()> {
        sqlx::query("INSERT INTO muscles (id, name) VALUES (?1, ?2)")
            .bind(muscle.id.to_string())
            .bind(&muscle.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// List all muscles.
    pub async fn get_muscles(&self) -> Result<Vec<Muscle>> {
        let rows = sqlx::query("SELECT id, name FROM muscles")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                Ok(Muscle {
                    id: Uuid::parse_str(&id)?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }

    /// Check whether a muscle exists.
    pub async fn muscle_exists(&self, muscle_id: Uuid) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM muscles WHERE id = ?1")
            .bind(muscle_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    // ================================
    // Exercises
    // ================================

    /// Create a catalog exercise.
    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<()> {
        sqlx::query(
            "INSERT INTO exercises (id, name, muscles, notes, uid) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.name)
        .bind(serde_json::to_string(&exercise.muscles)?)
        .bind(&exercise.notes)
        .bind(exercise.uid.to_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get an exercise by id.
    pub async fn get_exercise(&self, exercise_id: Uuid) -> Result<Option<Exercise>> {
        let row = sqlx::query("SELECT * FROM exercises WHERE id = ?1")
            .bind(exercise_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| Self::row_to_exercise(&r)).transpose()
    }

    /// Exercises owned by the admin sentinel or the given user.
    pub async fn get_exercises_visible_to(&self, user_id: Uuid) -> Result<Vec<Exercise>> {
        let rows = sqlx::query("SELECT * FROM exercises WHERE uid IN ('admin', ?1)")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::row_to_exercise).collect()
    }

    fn row_to_exercise(row: &sqlx::sqlite::SqliteRow) -> Result<Exercise> {
        let id: String = row.try_get("id")?;
        let muscles: String = row.try_get("muscles")?;
        let uid: String = row.try_get("uid")?;
        Ok(Exercise {
            id: Uuid::parse_str(&id)?,
            name: row.try_get("name")?,
            muscles: serde_json::from_str(&muscles)?,
            notes: row.try_get("notes")?,
            uid: uid.parse::<Owner>()?,
        })
    }

    // ================================
    // Plans
    // ================================

    /// Persist a validated plan.
    pub async fn create_plan(&self, plan: &Plan) -> Result<()> {
        sqlx::query("INSERT INTO plans (id, name, creator_id, groups) VALUES (?1, ?2, ?3, ?4)")
            .bind(plan.id.to_string())
            .bind(&plan.name)
            .bind(plan.creator_id.to_string())
            .bind(serde_json::to_string(&plan.groups)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Get a plan by id.
    pub async fn get_plan(&self, plan_id: Uuid) -> Result<Option<Plan>> {
        let row = sqlx::query("SELECT * FROM plans WHERE id = ?1")
            .bind(plan_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| Self::row_to_plan(&r)).transpose()
    }

    /// Plans created by the given user.
    pub async fn get_plans_by_creator(&self, user_id: Uuid) -> Result<Vec<Plan>> {
        let rows = sqlx::query("SELECT * FROM plans WHERE creator_id = ?1")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::row_to_plan).collect()
    }

    /// Replace a plan's name and groups. Owner checks happen in the caller.
    pub async fn update_plan(&self, plan: &Plan) -> Result<()> {
        sqlx::query("UPDATE plans SET name = ?1, groups = ?2 WHERE id = ?3")
            .bind(&plan.name)
            .bind(serde_json::to_string(&plan.groups)?)
            .bind(plan.id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn row_to_plan(row: &sqlx::sqlite::SqliteRow) -> Result<Plan> {
        let id: String = row.try_get("id")?;
        let creator_id: String = row.try_get("creator_id")?;
        let groups: String = row.try_get("groups")?;
        Ok(Plan {
            id: Uuid::parse_str(&id)?,
            name: row.try_get("name")?,
            creator_id: Uuid::parse_str(&creator_id)?,
            groups: serde_json::from_str(&groups)?,
        })
    }

    // ================================
    // Workouts
    // ================================

    /// Persist a validated workout.
    pub async fn create_workout(&self, workout: &Workout) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, plan_id, uid, start_time, end_time, groups)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(workout.id.to_string())
        .bind(workout.plan_id.to_string())
        .bind(workout.uid.to_string())
        .bind(workout.start_time)
        .bind(workout.end_time)
        .bind(serde_json::to_string(&workout.groups)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Workouts logged by the given user.
    pub async fn get_workouts_by_owner(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let rows = sqlx::query("SELECT * FROM workouts WHERE uid = ?1")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::row_to_workout).collect()
    }

    fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> Result<Workout> {
        let id: String = row.try_get("id")?;
        let plan_id: String = row.try_get("plan_id")?;
        let uid: String = row.try_get("uid")?;
        let groups: String = row.try_get("groups")?;
        Ok(Workout {
            id: Uuid::parse_str(&id)?,
            plan_id: Uuid::parse_str(&plan_id)?,
            uid: Uuid::parse_str(&uid)?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            groups: serde_json::from_str(&groups)?,
        })
    }
}
