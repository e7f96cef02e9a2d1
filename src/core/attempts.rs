//! # Attempts: the retry state machine.
//!
//! Shared by the blocking and the async executor so both flavors have
//! identical control flow and aggregation semantics. The executor owns the
//! operation and the sleeping; this type owns every decision in between.
//!
//! ## States
//! ```text
//! RUNNING (index < attempts)
//!   ├─ Ok               ─► DONE (executor returns the value)
//!   └─ Err(failure)
//!        ├─ retry_if = false          ─► record, DONE
//!        └─ retry_if = true
//!             ├─ on_retry(index, &err)
//!             ├─ record
//!             ├─ index == attempts − 1 ─► DONE (no sleep)
//!             └─ Wait(delay_for(index)), index += 1
//! ```
//!
//! ## Rules
//! - Every failure is recorded, including the one that stops the loop.
//! - The predicate sees the classified [`Failure`]; storage gets the unwrapped error.
//! - No sleep ever follows the final permitted attempt or a predicate veto.

use std::{fmt::Display, time::Duration};

use crate::{
    aggregate::AttemptErrors,
    core::config::RetryConfig,
    error::{Failure, RetryError},
};

/// What the executor must do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Sleep for the given delay, then run the next attempt.
    Wait(Duration),
    /// Stop and return [`Attempts::finish`].
    Done,
}

/// Per-invocation retry state. Never outlives one executor call.
pub(crate) struct Attempts<'a, E> {
    cfg: &'a RetryConfig<E>,
    index: u32,
    errors: AttemptErrors<E>,
}

impl<'a, E> Attempts<'a, E> {
    pub(crate) fn new(cfg: &'a RetryConfig<E>) -> Self {
        Self {
            cfg,
            index: 0,
            errors: AttemptErrors::new(cfg.attempts, cfg.last_error_only),
        }
    }

    /// `true` while another attempt is permitted.
    #[inline]
    pub(crate) fn is_running(&self) -> bool {
        self.index < self.cfg.attempts
    }

    /// Builds the final error from what has been recorded.
    pub(crate) fn finish(mut self) -> RetryError<E> {
        if self.errors.is_empty() {
            tracing::debug!(max_attempts = self.cfg.attempts, "no attempts were made");
            return RetryError::NoAttempts;
        }
        if self.errors.is_last_error_only() {
            if let Some((index, error)) = self.errors.take_last() {
                return RetryError::Last {
                    attempt: index + 1,
                    error,
                };
            }
        }
        RetryError::All(self.errors)
    }
}

impl<E: Display> Attempts<'_, E> {
    /// Handles a failed attempt and decides the next step.
    pub(crate) fn fail(&mut self, failure: Failure<E>) -> Step {
        let index = self.index;
        let max_attempts = self.cfg.attempts;

        if !(self.cfg.retry_if)(&failure) {
            tracing::debug!(
                attempt = index,
                max_attempts,
                kind = failure.as_label(),
                error = %failure,
                "failure not retryable; stopping"
            );
            self.errors.record(index, failure.into_inner());
            return Step::Done;
        }

        (self.cfg.on_retry)(index, failure.inner());

        if index >= max_attempts.saturating_sub(1) {
            tracing::debug!(
                attempt = index,
                max_attempts,
                error = %failure,
                "retry budget exhausted"
            );
            self.errors.record(index, failure.into_inner());
            return Step::Done;
        }

        let delay = self.cfg.delay_for(index);
        tracing::debug!(
            attempt = index,
            max_attempts,
            delay_ms = millis(delay),
            error = %failure,
            "retry scheduled"
        );
        self.errors.record(index, failure.into_inner());
        self.index += 1;
        Step::Wait(delay)
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
