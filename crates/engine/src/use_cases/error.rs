//! Use case errors.

use kilmere_domain::DomainError;

/// Errors surfaced by the school use cases.
#[derive(Debug, thiserror::Error)]
pub enum SchoolError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SchoolError {
    /// True when the caller handed in malformed input rather than hitting a rule.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SchoolError::Domain(
                DomainError::InvalidArgument(_)
                    | DomainError::Parse(_)
                    | DomainError::UnsupportedSpellCategory(_)
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_and_keep_their_message() {
        let err: SchoolError = DomainError::invalid_argument("bad pair").into();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("bad pair"));
    }

    #[test]
    fn unknown_trait_is_not_invalid_input() {
        let err: SchoolError = DomainError::unknown_trait("Ron", "brave").into();
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Ron does not have a character trait with the name 'brave'"
        );
    }
}
