//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Absent ids are not errors here: lookups return `Option` and
/// deletes/updates of unknown ids succeed silently.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Any fault raised by the persistence layer
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    /// The storage connection could not be established
    #[error("database not initialized: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = DomainError::from(rusqlite::Error::InvalidQuery);
        assert!(err.to_string().starts_with("storage error:"));
    }

    #[test]
    fn test_unavailable_display() {
        let err = DomainError::Unavailable("no such file".to_string());
        assert_eq!(err.to_string(), "database not initialized: no such file");
    }
}
