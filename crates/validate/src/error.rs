//! Two-tier error taxonomy for validation outcomes
//!
//! A check can fail in two distinct ways: the expectation it evaluates does
//! not hold ([`ValidationError`]), or the check itself could not run, most
//! commonly because the body stream was unreadable ([`InternalError`]).
//! Aggregate runs collect failures of either kind into a [`MultiError`]
//! that preserves encounter order and never nests.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error type used as the cause of an [`InternalError`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A failed expectation.
///
/// Carries a human-readable message, typically of the form
/// "expected X, found Y". This is the normal kind of check failure and is
/// meant to be read by the test author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure in the act of checking.
///
/// Wraps the error encountered while attempting to evaluate a validator,
/// so calling code can tell a broken fixture apart from a real assertion
/// failure. The underlying cause stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug)]
pub struct InternalError {
    context: Option<String>,
    source: BoxError,
}

impl InternalError {
    /// Wraps the given cause in an internal error.
    #[must_use]
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            context: None,
            source: source.into(),
        }
    }

    /// Prefixes additional context to the error message.
    ///
    /// The wrapped cause chain is preserved, not replaced; only the
    /// rendered message gains the prefix.
    #[must_use]
    pub fn wrap(mut self, context: impl Into<String>) -> Self {
        self.context = Some(match self.context {
            Some(existing) => format!("{}: {existing}", context.into()),
            None => context.into(),
        });
        self
    }

    /// Returns the wrapped cause.
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync) {
        self.source.as_ref()
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{context}: {}", self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

impl StdError for InternalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Which kind of target a runner entry point was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A request-shaped target.
    Request,
    /// A response-shaped target.
    Response,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Response => write!(f, "response"),
        }
    }
}

/// The error type returned by a check or an aggregate run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An expectation was evaluated and failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The check itself could not run.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Several failures collected from one aggregate run.
    #[error(transparent)]
    Multi(#[from] MultiError),

    /// No target was supplied to validate.
    #[error("no {0} to validate")]
    MissingTarget(TargetKind),
}

impl CheckError {
    /// Shorthand for a [`ValidationError`] with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(message))
    }

    /// Returns true if this is a failed expectation (including an
    /// aggregate made up solely of failed expectations).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Multi(multi) => multi.iter().all(Self::is_validation),
            Self::Internal(_) | Self::MissingTarget(_) => false,
        }
    }

    /// Returns true if this failure (or any part of an aggregate) means a
    /// check could not run.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Internal(_) => true,
            Self::Multi(multi) => multi.iter().any(Self::is_internal),
            Self::Validation(_) | Self::MissingTarget(_) => false,
        }
    }
}

/// An ordered, flattenable collection of check failures.
///
/// Produced by one aggregate run under the collect-all policy. Pushing an
/// error that is itself a `MultiError` splices its elements in order, so
/// the collection stays flat no matter how checks were grouped.
#[derive(Debug, Default)]
pub struct MultiError {
    errors: Vec<CheckError>,
}

impl StdError for MultiError {}

impl MultiError {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a failure, splicing in the elements of nested aggregates.
    pub fn push(&mut self, error: CheckError) {
        match error {
            CheckError::Multi(multi) => {
                for inner in multi.errors {
                    self.push(inner);
                }
            }
            other => self.errors.push(other),
        }
    }

    /// Returns the collected failures in encounter order.
    #[must_use]
    pub fn errors(&self) -> &[CheckError] {
        &self.errors
    }

    /// Consumes the collection, returning the failures in encounter order.
    #[must_use]
    pub fn into_errors(self) -> Vec<CheckError> {
        self.errors
    }

    /// Iterates over the collected failures.
    pub fn iter(&self) -> std::slice::Iter<'_, CheckError> {
        self.errors.iter()
    }

    /// Returns the number of collected failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Maps an empty collection to `Ok(())` and a non-empty one to itself.
    ///
    /// # Errors
    ///
    /// Returns `Err(CheckError::Multi(self))` if any failure was collected.
    pub fn into_result(self) -> Result<(), CheckError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CheckError::Multi(self))
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            writeln!(f, "1 check failed:")?;
        } else {
            writeln!(f, "{} checks failed:", self.errors.len())?;
        }
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a CheckError;
    type IntoIter = std::slice::Iter<'a, CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("expected method \"GET\", found \"POST\"");
        assert_eq!(err.to_string(), "expected method \"GET\", found \"POST\"");
    }

    #[test]
    fn test_internal_error_preserves_cause() {
        let cause = std::io::Error::other("connection reset");
        let err = InternalError::new(cause).wrap("failed to read request body");

        assert_eq!(
            err.to_string(),
            "failed to read request body: connection reset"
        );
        assert_eq!(err.cause().to_string(), "connection reset");
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_internal_error_wrap_twice() {
        let err = InternalError::new(std::io::Error::other("boom"))
            .wrap("inner")
            .wrap("outer");
        assert_eq!(err.to_string(), "outer: inner: boom");
    }

    #[test]
    fn test_multi_error_preserves_order() {
        let mut multi = MultiError::new();
        multi.push(CheckError::validation("first"));
        multi.push(CheckError::validation("second"));

        let messages: Vec<String> = multi.iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_multi_error_flattens_nested() {
        let mut inner = MultiError::new();
        inner.push(CheckError::validation("a"));
        inner.push(CheckError::validation("b"));

        let mut outer = MultiError::new();
        outer.push(CheckError::validation("before"));
        outer.push(CheckError::Multi(inner));
        outer.push(CheckError::validation("after"));

        assert_eq!(outer.len(), 4);
        let messages: Vec<String> = outer.iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["before", "a", "b", "after"]);
    }

    #[test]
    fn test_multi_error_display() {
        let mut multi = MultiError::new();
        multi.push(CheckError::validation("body is not valid JSON"));
        multi.push(CheckError::validation("expected URL path \"/a\", found \"/b\""));

        let rendered = multi.to_string();
        assert_eq!(
            rendered,
            "2 checks failed:\n  - body is not valid JSON\n  - expected URL path \"/a\", found \"/b\"\n"
        );
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        assert!(MultiError::new().into_result().is_ok());
    }

    #[test]
    fn test_classification_helpers() {
        let validation = CheckError::validation("nope");
        assert!(validation.is_validation());
        assert!(!validation.is_internal());

        let internal = CheckError::Internal(InternalError::new(std::io::Error::other("io")));
        assert!(internal.is_internal());
        assert!(!internal.is_validation());

        let mut mixed = MultiError::new();
        mixed.push(CheckError::validation("nope"));
        mixed.push(CheckError::Internal(InternalError::new(
            std::io::Error::other("io"),
        )));
        let mixed = CheckError::Multi(mixed);
        assert!(mixed.is_internal());
        assert!(!mixed.is_validation());
    }

    #[test]
    fn test_missing_target_display() {
        let err = CheckError::MissingTarget(TargetKind::Request);
        assert_eq!(err.to_string(), "no request to validate");
        let err = CheckError::MissingTarget(TargetKind::Response);
        assert_eq!(err.to_string(), "no response to validate");
    }
}
