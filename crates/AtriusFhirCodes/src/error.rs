//! Error types for bound code resolution and construction
//!
//! Every failure in this crate is one of three kinds, each with its own type
//! so that signatures state exactly what can go wrong:
//!
//! - [`UnknownCodeError`] - a literal that is not part of the vocabulary
//! - [`InvalidInputError`] - no literal where one was required
//! - [`ValidationError`] - a built instance failed a post-construction check
//!
//! [`CodeError`] wraps all three for call sites where more than one can occur.

use thiserror::Error;

/// Result type alias for operations that may fail with any [`CodeError`]
pub type CodeResult<T> = Result<T, CodeError>;

/// A literal was supplied but is not a member of the vocabulary's closed set.
///
/// Matching is exact, so near misses such as `"Home"`, `" home"` or the empty
/// string all produce this error for the `AddressUse` vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown code '{code}' for vocabulary {vocabulary}")]
pub struct UnknownCodeError {
    /// Name of the vocabulary the lookup ran against
    pub vocabulary: &'static str,
    /// The literal exactly as it was supplied
    pub code: String,
}

impl UnknownCodeError {
    pub fn new(vocabulary: &'static str, code: impl Into<String>) -> Self {
        Self {
            vocabulary,
            code: code.into(),
        }
    }
}

/// No literal was supplied where the call contract requires one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input for vocabulary {vocabulary}: {message}")]
pub struct InvalidInputError {
    pub vocabulary: &'static str,
    pub message: String,
}

impl InvalidInputError {
    pub fn new(vocabulary: &'static str, message: impl Into<String>) -> Self {
        Self {
            vocabulary,
            message: message.into(),
        }
    }
}

/// A built instance failed one of its post-construction checks.
///
/// `instance` is a rendering of the failing value so the offending element can
/// be identified from the error alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{vocabulary} {instance} failed validation: {message}")]
pub struct ValidationError {
    pub vocabulary: &'static str,
    pub instance: String,
    pub message: String,
}

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error(transparent)]
    UnknownCode(#[from] UnknownCodeError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CodeError {
    /// Name of the vocabulary the failure belongs to.
    pub fn vocabulary(&self) -> &'static str {
        match self {
            CodeError::UnknownCode(e) => e.vocabulary,
            CodeError::InvalidInput(e) => e.vocabulary,
            CodeError::Validation(e) => e.vocabulary,
        }
    }
}

/// The configuration document could not be read.
#[derive(Debug, Error)]
#[error("invalid code configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message() {
        let err = UnknownCodeError::new("AddressUse", "house");
        assert_eq!(
            err.to_string(),
            "unknown code 'house' for vocabulary AddressUse"
        );
    }

    #[test]
    fn test_code_error_is_transparent() {
        let err: CodeError = UnknownCodeError::new("AddressUse", "house").into();
        assert_eq!(err.vocabulary(), "AddressUse");
        assert_eq!(
            err.to_string(),
            "unknown code 'house' for vocabulary AddressUse"
        );
    }
}
