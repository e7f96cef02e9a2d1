//! Error types used by the retry engine and by retried operations.
//!
//! This module defines two enums:
//!
//! - [`Failure`] — how an operation reports a failed attempt (transient or terminal).
//! - [`RetryError`] — what the executor returns once it gives up.
//!
//! Both provide helper methods (`as_label`, `as_message`) for logs/metrics;
//! [`RetryError`] also offers accessors over the recorded per-attempt errors.

use std::fmt::Display;
use thiserror::Error;

use crate::aggregate::AttemptErrors;

/// # Failure reported by one attempt.
///
/// Operations return `Result<T, Failure<E>>`. Plain errors convert into
/// [`Failure::Transient`] via `From`, so `?` inside an operation marks errors
/// retryable by default. Wrap an error with [`unrecoverable`] to stop the loop
/// immediately regardless of the remaining budget.
///
/// The tag is consumed by the retry predicate only; recorded errors are always
/// the unwrapped `E`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure<E> {
    /// Failure that may succeed if retried.
    #[error("{0}")]
    Transient(E),

    /// Non-recoverable failure (should not be retried).
    #[error("{0}")]
    Terminal(E),
}

impl<E> Failure<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Failure::Transient(_) => "attempt_transient",
            Failure::Terminal(_) => "attempt_terminal",
        }
    }

    /// Borrows the underlying error.
    pub fn inner(&self) -> &E {
        match self {
            Failure::Transient(e) | Failure::Terminal(e) => e,
        }
    }

    /// Unwraps the underlying error, dropping the classification.
    pub fn into_inner(self) -> E {
        match self {
            Failure::Transient(e) | Failure::Terminal(e) => e,
        }
    }

    /// Indicates whether the failure was marked unrecoverable.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Failure::Terminal(_))
    }
}

impl<E: Display> Failure<E> {
    /// Returns a human-readable message tagged with the classification.
    pub fn as_message(&self) -> String {
        match self {
            Failure::Transient(e) => format!("transient: {e}"),
            Failure::Terminal(e) => format!("terminal: {e}"),
        }
    }
}

impl<E> From<E> for Failure<E> {
    fn from(error: E) -> Self {
        Failure::Transient(error)
    }
}

/// Marks `error` as unrecoverable: the executor stops after this attempt.
///
/// # Example
/// ```
/// use retrier::{unrecoverable, Failure};
///
/// let f = unrecoverable("invalid token");
/// assert!(f.is_terminal());
/// assert_eq!(f.into_inner(), "invalid token");
/// ```
pub fn unrecoverable<E>(error: E) -> Failure<E> {
    Failure::Terminal(error)
}

/// # Error returned when the executor gives up.
///
/// - [`RetryError::All`] every recorded attempt error (default mode).
/// - [`RetryError::Last`] only the most recent error (`last_error_only`).
/// - [`RetryError::NoAttempts`] the budget was zero, the operation never ran.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// Attempt budget was zero; the operation was never invoked.
    #[error("no attempts were made")]
    NoAttempts,

    /// Most recent error only, rendered exactly as the error itself.
    #[error("{error}")]
    Last {
        /// 1-based number of the attempt that produced `error`.
        attempt: u32,
        /// The error of that attempt.
        error: E,
    },

    /// Every recorded error, rendered as a numbered list.
    #[error("{0}")]
    All(AttemptErrors<E>),
}

impl<E> RetryError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use retrier::RetryError;
    ///
    /// let err: RetryError<String> = RetryError::NoAttempts;
    /// assert_eq!(err.as_label(), "retry_no_attempts");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::NoAttempts => "retry_no_attempts",
            RetryError::Last { .. } => "retry_last_error",
            RetryError::All(_) => "retry_all_failed",
        }
    }

    /// Returns the most recent recorded error, if any.
    pub fn last(&self) -> Option<&E> {
        match self {
            RetryError::NoAttempts => None,
            RetryError::Last { error, .. } => Some(error),
            RetryError::All(errors) => errors.last(),
        }
    }

    /// Number of errors carried by this value.
    pub fn len(&self) -> usize {
        match self {
            RetryError::NoAttempts => 0,
            RetryError::Last { .. } => 1,
            RetryError::All(errors) => errors.len(),
        }
    }

    /// `true` when no error was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the value, returning the recorded errors in attempt order.
    pub fn into_errors(self) -> Vec<E> {
        match self {
            RetryError::NoAttempts => Vec::new(),
            RetryError::Last { error, .. } => vec![error],
            RetryError::All(errors) => errors.into_vec(),
        }
    }
}

impl<E: Display> RetryError<E> {
    /// Returns a human-readable message with attempt numbers attached.
    ///
    /// Unlike `Display`, [`RetryError::Last`] keeps its attempt number and
    /// [`RetryError::All`] drops the header line.
    pub fn as_message(&self) -> String {
        match self {
            RetryError::NoAttempts => "no attempts were made".to_string(),
            RetryError::Last { attempt, error } => format!("attempt {attempt}: {error}"),
            RetryError::All(errors) => errors
                .iter()
                .map(|(n, e)| format!("#{n}: {e}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_displays_inner() {
        assert_eq!(Failure::Transient("timeout").to_string(), "timeout");
        assert_eq!(unrecoverable("denied").to_string(), "denied");
    }

    #[test]
    fn test_failure_unwraps() {
        let f: Failure<&str> = "x".into();
        assert!(!f.is_terminal());
        assert_eq!(f.as_label(), "attempt_transient");
        assert_eq!(*f.inner(), "x");

        let t = unrecoverable(7);
        assert_eq!(t.as_label(), "attempt_terminal");
        assert_eq!(t.into_inner(), 7);
    }

    #[test]
    fn test_question_mark_classifies_transient() {
        fn parse(s: &str) -> Result<u8, Failure<std::num::ParseIntError>> {
            Ok(s.parse::<u8>()?)
        }
        assert!(matches!(parse("x"), Err(Failure::Transient(_))));
        assert_eq!(parse("42"), Ok(42));
    }

    #[test]
    fn test_last_renders_bare_message() {
        let err = RetryError::Last {
            attempt: 3,
            error: "connection reset",
        };
        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(err.as_label(), "retry_last_error");
        assert_eq!(err.last(), Some(&"connection reset"));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_no_attempts_is_empty() {
        let err: RetryError<&str> = RetryError::NoAttempts;
        assert!(err.is_empty());
        assert!(err.last().is_none());
        assert!(err.into_errors().is_empty());
        assert_eq!(
            RetryError::<&str>::NoAttempts.to_string(),
            "no attempts were made"
        );
    }

    #[test]
    fn test_all_exposes_errors_in_order() {
        let mut errors = AttemptErrors::new(3, false);
        errors.record(0, "a");
        errors.record(1, "b");
        let err = RetryError::All(errors);
        assert_eq!(err.as_label(), "retry_all_failed");
        assert_eq!(err.last(), Some(&"b"));
        assert_eq!(err.into_errors(), vec!["a", "b"]);
    }

    #[test]
    fn test_retry_error_is_std_error() {
        fn assert_error<T: std::error::Error>(_: &T) {}
        let err: RetryError<std::io::Error> = RetryError::NoAttempts;
        assert_error(&err);
    }

    #[test]
    fn test_failure_message_carries_kind() {
        assert_eq!(Failure::Transient("timeout").as_message(), "transient: timeout");
        assert_eq!(unrecoverable("denied").as_message(), "terminal: denied");
    }

    #[test]
    fn test_retry_error_messages() {
        assert_eq!(
            RetryError::<&str>::NoAttempts.as_message(),
            "no attempts were made"
        );

        let last = RetryError::Last {
            attempt: 4,
            error: "connection reset",
        };
        assert_eq!(last.as_message(), "attempt 4: connection reset");

        let mut errors = AttemptErrors::new(3, false);
        errors.record(0, "a");
        errors.record(2, "c");
        assert_eq!(RetryError::All(errors).as_message(), "#1: a\n#3: c");
    }
}
