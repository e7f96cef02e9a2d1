//! On-retry observers.
//!
//! An [`OnRetry`] callback is invoked with `(attempt, &error)` after every
//! failed attempt the predicate allows to continue, before the executor sleeps.
//! It exists purely for observability: its side effects are not awaited, retried
//! or guarded by the executor.
//!
//! ## Contents
//! - [`OnRetry`]   the callback type stored in [`RetryConfig`](crate::RetryConfig)
//! - [`noop`]      the default callback
//! - `LogWriter`   a `tracing`-backed callback _(feature `logging`)_

#[cfg(feature = "logging")]
mod log;

use std::sync::Arc;

#[cfg(feature = "logging")]
pub use log::LogWriter;

/// Callback invoked with the 0-based attempt index and the attempt's error.
pub type OnRetry<E> = Arc<dyn Fn(u32, &E) + Send + Sync>;

/// Callback that does nothing (default).
pub fn noop<E: 'static>() -> OnRetry<E> {
    Arc::new(|_, _| {})
}
