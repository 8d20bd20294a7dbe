//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Everything in the browsing core is total over well-typed inputs, so these
/// errors only surface at the boundary: parsing user intents, validating a
/// catalog as it is loaded, or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a page size outside the allowed set).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank product id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. two products sharing one id).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("page size 7 is not allowed");
        assert_eq!(err.to_string(), "validation failed: page size 7 is not allowed");

        let err = DomainError::conflict("duplicate product id: a1");
        assert_eq!(err.to_string(), "conflict: duplicate product id: a1");
    }

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(DomainError::invalid_id("x"), DomainError::InvalidId(_)));
        assert!(matches!(DomainError::validation("x"), DomainError::Validation(_)));
        assert!(matches!(DomainError::conflict("x"), DomainError::Conflict(_)));
    }
}
