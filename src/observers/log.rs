//! # LogWriter — retry logger
//!
//! Builds an [`OnRetry`] callback that reports each retry through `tracing`.
//! Install a subscriber (e.g. `tracing-subscriber`) to see the output.
//!
//! ## Example output
//! ```text
//! WARN retrier: retrying operation op=GET /health attempt=0 error=connection refused
//! WARN retrier: retrying operation op=GET /health attempt=1 error=503 service unavailable
//! ```

use std::{borrow::Cow, fmt::Display, sync::Arc};

use super::OnRetry;

/// Retry logger.
#[derive(Clone, Debug, Default)]
pub struct LogWriter {
    op: Cow<'static, str>,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] labelled with the operation name.
    #[must_use]
    pub fn new(op: impl Into<Cow<'static, str>>) -> Self {
        Self { op: op.into() }
    }

    /// Returns the operation label.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Converts the writer into an [`OnRetry`] callback.
    pub fn on_retry<E: Display + 'static>(self) -> OnRetry<E> {
        Arc::new(move |attempt, error: &E| {
            tracing::warn!(
                target: "retrier",
                op = %self.op,
                attempt,
                error = %error,
                "retrying operation"
            );
        })
    }
}
