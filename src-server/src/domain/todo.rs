//! Todo Entity
//!
//! A single todo entry. `id` and `title` are fixed at creation;
//! `done` is the only field that changes afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Opaque, server-assigned identifier of a todo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generate a fresh random id (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item as stored and as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Item text, any string including empty
    pub title: String,
    /// Completion status
    pub done: bool,
}

impl TodoItem {
    /// Create a new, not yet done item with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            title: title.into(),
            done: false,
        }
    }
}

impl Entity for TodoItem {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
