//! Executor core: configuration and the retry loop.
//!
//! The public API from this module is [`Retrier`] (plus the [`retry`] /
//! [`retry_async`] shorthands), [`RetryConfig`] and [`RetryOption`].
//!
//! Internal modules:
//! - [`config`]: defaults and per-call overrides;
//! - [`attempts`]: the state machine shared by both executor flavors;
//! - [`retrier`]: blocking and async loops that invoke the operation and sleep.

mod attempts;
mod config;
mod retrier;

pub use config::{RetryConfig, RetryOption};
pub use retrier::{retry, retry_async, Retrier};
