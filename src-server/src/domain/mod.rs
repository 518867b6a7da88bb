//! Domain Layer
//!
//! Contains the todo entity and core abstractions.
//! No HTTP dependencies; storage faults carry the underlying rusqlite error.

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{TodoId, TodoItem};
