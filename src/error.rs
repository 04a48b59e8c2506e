//! Error types shared across the crate.
//!
//! This module provides the error taxonomy used by the range generator
//! and the stream pipeline. Errors are raised synchronously and surfaced
//! to the immediate caller; nothing is retried or auto-recovered.

/// Represents a violated static precondition.
///
/// This error is produced before any lazy work begins, for example when
/// [`ranges`](crate::ranges::ranges) receives zero dimension specs or a
/// dimension with a zero step, or when a strict zip detects inputs of
/// different lengths.
///
/// # Examples
///
/// ```rust
/// use seqtools::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "ranges",
///     message: "at least one dimension spec is required",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "ranges: at least one dimension spec is required"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected its arguments.
    pub operation: &'static str,
    /// A description of the violated precondition.
    pub message: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.operation, self.message)
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents a terminal operation applied to an empty source.
///
/// Terminal operations that have no sensible result on an empty
/// sequence and were given no caller-supplied default (`max`, `min`,
/// `reduce`) produce this error rather than silently returning a
/// sentinel value.
///
/// # Examples
///
/// ```rust
/// use seqtools::error::EmptyCollectionError;
///
/// let error = EmptyCollectionError { operation: "max" };
/// assert_eq!(format!("{}", error), "max: the sequence yielded no elements");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCollectionError {
    /// The name of the terminal operation applied to the empty source.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyCollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: the sequence yielded no elements", self.operation)
    }
}

impl std::error::Error for EmptyCollectionError {}

/// Unified error type for sequence operations.
///
/// # Examples
///
/// ```rust
/// use seqtools::error::{InvalidArgumentError, SequenceError};
///
/// let error = SequenceError::InvalidArgument(InvalidArgumentError {
///     operation: "zip_strict",
///     message: "sources have different lengths",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A static precondition was violated before any lazy work began.
    InvalidArgument(InvalidArgumentError),
    /// A terminal operation had no sensible result on an empty source.
    EmptyCollection(EmptyCollectionError),
}

impl SequenceError {
    /// Builds an [`InvalidArgument`](Self::InvalidArgument) error.
    #[must_use]
    pub const fn invalid_argument(operation: &'static str, message: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgumentError { operation, message })
    }

    /// Builds an [`EmptyCollection`](Self::EmptyCollection) error.
    #[must_use]
    pub const fn empty_collection(operation: &'static str) -> Self {
        Self::EmptyCollection(EmptyCollectionError { operation })
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::EmptyCollection(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::EmptyCollection(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SequenceError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<EmptyCollectionError> for SequenceError {
    fn from(error: EmptyCollectionError) -> Self {
        Self::EmptyCollection(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = InvalidArgumentError {
            operation: "ranges",
            message: "at least one dimension spec is required",
        };
        assert_eq!(
            format!("{error}"),
            "ranges: at least one dimension spec is required"
        );
    }

    #[test]
    fn test_empty_collection_display() {
        let error = EmptyCollectionError { operation: "reduce" };
        assert_eq!(format!("{error}"), "reduce: the sequence yielded no elements");
    }

    #[test]
    fn test_sequence_error_display() {
        let error = SequenceError::invalid_argument("ranges", "step must not be zero");
        assert_eq!(format!("{error}"), "ranges: step must not be zero");

        let error = SequenceError::empty_collection("min");
        assert_eq!(format!("{error}"), "min: the sequence yielded no elements");
    }

    #[test]
    fn test_sequence_error_equality() {
        assert_eq!(
            SequenceError::empty_collection("max"),
            SequenceError::empty_collection("max")
        );
        assert_ne!(
            SequenceError::empty_collection("max"),
            SequenceError::empty_collection("min")
        );
    }

    #[test]
    fn test_sequence_error_source() {
        use std::error::Error;

        let error = SequenceError::invalid_argument("ranges", "step must not be zero");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_sequence_error_from_parts() {
        let inner = EmptyCollectionError { operation: "reduce" };
        let error: SequenceError = inner.clone().into();
        assert_eq!(error, SequenceError::EmptyCollection(inner));
    }
}
