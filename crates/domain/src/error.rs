//! Unified error types for the domain layer
//!
//! Every error here is recoverable at the call site. Decisions that merely
//! reject an action (too young, wrong house, failed exam) are not errors;
//! they come back as outcome enums from `crate::events`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed input handed to a setter; state is left untouched
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A trait was queried that was never set on the member
    #[error("{member} does not have a character trait with the name '{trait_name}'")]
    UnknownTrait { member: String, trait_name: String },

    /// The spell category is not one the school teaches
    #[error("Unsupported spell category: {0}")]
    UnsupportedSpellCategory(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for HouseName {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Slytherin" => Ok(Self::Slytherin),
    ///             _ => Err(DomainError::parse(format!("Unknown house: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an unknown trait error
    pub fn unknown_trait(member: impl Into<String>, trait_name: impl Into<String>) -> Self {
        Self::UnknownTrait {
            member: member.into(),
            trait_name: trait_name.into(),
        }
    }

    /// Create an unsupported spell category error
    pub fn unsupported_spell_category(category: impl Into<String>) -> Self {
        Self::UnsupportedSpellCategory(category.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("expected (subject, grade)");
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected (subject, grade)"
        );
    }

    #[test]
    fn test_unknown_trait_error() {
        let err = DomainError::unknown_trait("Cassidy", "brave");
        assert!(matches!(err, DomainError::UnknownTrait { .. }));
        assert_eq!(
            err.to_string(),
            "Cassidy does not have a character trait with the name 'brave'"
        );
    }

    #[test]
    fn test_unsupported_spell_category_error() {
        let err = DomainError::unsupported_spell_category("Prophecy");
        assert!(err.to_string().contains("Prophecy"));
    }
}
