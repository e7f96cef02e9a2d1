//! # retrier
//!
//! **Retrier** re-invokes a fallible operation under a configurable policy
//! until it succeeds, exhausts its attempt budget, or returns an error the
//! operation explicitly marked unrecoverable.
//!
//! It is meant as a building block for clients (HTTP helpers, storage
//! adapters, ...) that hand it an operation and consume the final result.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!            caller
//!              │ op: FnMut() -> Result<T, Failure<E>>
//!              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Retrier (holds RetryConfig defaults)                     │
//! │   + per-call RetryOption overrides → RetryConfig (clone)  │
//! └─────────────┬─────────────────────────────────────────────┘
//!               ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Attempts (state machine, one per call)                   │
//! │   - RetryIf       decides continue/stop                   │
//! │   - OnRetry       observability callback                  │
//! │   - DelayStrategy wait after attempt n, clamped max_delay │
//! │   - AttemptErrors records every failure                   │
//! └─────────────┬─────────────────────────────────────────────┘
//!               ▼
//!      Ok(T)  or  Err(RetryError<E>)
//! ```
//!
//! ### Lifecycle
//! ```text
//! n = 0
//! while n < attempts {
//!   ├─► op()
//!   │     ├─ Ok(v)  ──► return Ok(v)
//!   │     └─ Err(f)
//!   │          ├─ !retry_if(&f)      ─► record, stop
//!   │          ├─ on_retry(n, &err)
//!   │          ├─ record err at n
//!   │          ├─ n == attempts − 1  ─► stop (no sleep)
//!   │          └─ sleep(delay_for(n)), n += 1
//! }
//! return Err(RetryError)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / functions                          |
//! |-------------------|---------------------------------------------------------------|------------------------------------------------|
//! | **Execution**     | Blocking and tokio-based retry loops sharing one state machine.| [`Retrier`], [`retry`], [`retry_async`]       |
//! | **Configuration** | Explicit defaults plus ordered per-call overrides.            | [`RetryConfig`], [`RetryOption`]               |
//! | **Delays**        | Fixed, back-off, jitter, sums and custom functions.           | [`DelayStrategy`], [`Timing`]                  |
//! | **Classification**| Transient vs. unrecoverable failures, custom predicates.      | [`Failure`], [`unrecoverable`], [`RetryIf`]    |
//! | **Errors**        | Aggregated per-attempt errors with stable rendering.          | [`RetryError`], [`AttemptErrors`]              |
//! | **Observability** | On-retry callbacks, `tracing` debug events.                   | [`OnRetry`]                                    |
//!
//! ## Optional features
//! - `logging`: exports [`LogWriter`], an [`OnRetry`] factory that logs through `tracing`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retrier::{unrecoverable, Failure, Retrier, RetryConfig, RetryError, RetryOption};
//!
//! // Built once at startup and shared by reference.
//! let retrier: Retrier<String> = Retrier::new(
//!     RetryConfig::new(3, Duration::ZERO, Duration::from_millis(1), false),
//! );
//!
//! // (body, status) call shape.
//! let mut calls = 0;
//! let (body, status) = retrier
//!     .run(|| {
//!         calls += 1;
//!         if calls < 2 {
//!             Err(Failure::Transient("503 service unavailable".to_string()))
//!         } else {
//!             Ok(("pong".to_string(), 200))
//!         }
//!     })
//!     .unwrap();
//! assert_eq!((body.as_str(), status), ("pong", 200));
//!
//! // Error-only call shape; an unrecoverable error stops at once.
//! let err = retrier
//!     .run(|| -> Result<(), _> { Err(unrecoverable("401 unauthorized".to_string())) })
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "All attempts fail:\n#1: 401 unauthorized");
//!
//! // Value call shape with per-call overrides.
//! let err = retrier
//!     .run_with([RetryOption::LastErrorOnly(true)], || -> Result<String, _> {
//!         Err(Failure::Transient("timeout".to_string()))
//!     })
//!     .unwrap_err();
//! assert!(matches!(err, RetryError::Last { attempt: 3, .. }));
//! ```
mod aggregate;
mod core;
mod error;
mod observers;
mod policies;
#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use aggregate::AttemptErrors;
pub use core::{retry, retry_async, Retrier, RetryConfig, RetryOption};
pub use error::{unrecoverable, Failure, RetryError};
pub use observers::{noop, OnRetry};
pub use policies::{default_retry_if, is_recoverable, DelayFn, DelayStrategy, RetryIf, Timing};

// Optional: expose a ready-made tracing logger for retries.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
