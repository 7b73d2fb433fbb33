//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The filtering core itself never fails; these errors only surface at the
/// boundaries where untyped input (data files, command text) becomes typed
/// domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A label did not name a known variant of a fixed enumeration.
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_message_names_kind_and_value() {
        let err = DomainError::unknown_variant("category", "Z");
        assert_eq!(err.to_string(), "unknown category: Z");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("price must be non-negative");
        assert_eq!(err.to_string(), "validation failed: price must be non-negative");
    }

    #[test]
    fn every_variant_is_a_boundary_failure() {
        let errors = [
            DomainError::validation("malformed action"),
            DomainError::unknown_variant("sort", "sideways"),
        ];
        for err in errors {
            let boundary = match err {
                DomainError::Validation(_) | DomainError::UnknownVariant { .. } => true,
            };
            assert!(boundary);
        }
    }
}
