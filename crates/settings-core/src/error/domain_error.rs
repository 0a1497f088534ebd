//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{GuildId, IdParseError};

/// Domain layer errors
///
/// A guild without stored settings is not an error; reads fall back to defaults.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdParseError),

    #[error("Duplicate role binding {role_id} in guild {guild_id}")]
    DuplicateRole { guild_id: GuildId, role_id: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for callers that report errors to users
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::InvalidId(_) => "INVALID_ID",
            Self::DuplicateRole { .. } => "DUPLICATE_ROLE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidId(_) | Self::DuplicateRole { .. })
    }

    /// Check if this error came from the storage engine
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::InvalidId(IdParseError::Empty);
        assert_eq!(err.code(), "INVALID_ID");

        let err = DomainError::DatabaseError("connection reset".to_string());
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidId(IdParseError::Empty).is_validation());
        assert!(DomainError::DuplicateRole {
            guild_id: GuildId::new("1"),
            role_id: "2".to_string(),
        }
        .is_validation());
        assert!(!DomainError::DatabaseError("x".to_string()).is_validation());
    }

    #[test]
    fn test_is_storage() {
        assert!(DomainError::DatabaseError("x".to_string()).is_storage());
        assert!(!DomainError::InvalidId(IdParseError::Empty).is_storage());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::from(IdParseError::TooLong { len: 30, max: 24 });
        assert_eq!(
            err.to_string(),
            "Invalid identifier: identifier exceeds 24 characters (got 30)"
        );

        let err = DomainError::DuplicateRole {
            guild_id: GuildId::new("10"),
            role_id: "20".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate role binding 20 in guild 10");
    }
}
