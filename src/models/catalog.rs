// ABOUTME: Muscle and exercise catalog models plus the Owner sentinel type
// ABOUTME: Owner serializes to the literal "admin" or a user UUID string on the wire
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 ironlog

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Owner of a catalog exercise.
///
/// Exercises seeded by the platform belong to [`Owner::Admin`] and are
/// visible to every user; user-created exercises belong to their creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Platform-owned, visible to all users
    Admin,
    /// Owned by a specific user
    User(Uuid),
}

impl Owner {
    /// True when the owner is the admin sentinel or the given user.
    #[must_use]
    pub fn visible_to(self, user_id: Uuid) -> bool {
        matches!(self, Self::Admin) || self == Self::User(user_id)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Owner {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "admin" {
            Ok(Self::Admin)
        } else {
            Uuid::parse_str(s).map(Self::User)
        }
    }
}

impl Serialize for Owner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Owner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A muscle in the global taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Muscle {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Display name
    pub name: String,
}

impl Muscle {
    /// Create a muscle with a fresh identifier.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// A catalog exercise referencing one or more muscles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Display name, 1-32 characters
    pub name: String,
    /// Referenced muscle ids, at least one
    pub muscles: Vec<Uuid>,
    /// Free-text notes, at most 200 characters
    pub notes: String,
    /// Owning user or the admin sentinel
    pub uid: Owner,
}

impl Exercise {
    /// Create an exercise with a fresh identifier.
    #[must_use]
    pub fn new(name: String, muscles: Vec<Uuid>, notes: String, uid: Owner) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            muscles,
            notes,
            uid,
        }
    }
}
