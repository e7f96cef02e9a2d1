//! Delay and retry-eligibility policies.
//!
//! This module groups the knobs that control **whether** another attempt is
//! made and **how long** to wait before it.
//!
//! ## Contents
//! - [`DelayStrategy`] how the wait after attempt `n` is computed
//! - [`Timing`]        base delay / jitter / ceiling consumed by strategies
//! - [`RetryIf`]       predicate deciding continue/stop from a failure
//!
//! ## Quick wiring
//! ```text
//! RetryConfig { delay_strategy, retry_if, delay, max_jitter, max_delay, .. }
//!      └─► core::attempts::Attempts uses:
//!           - retry_if to decide continue/stop
//!           - delay_for(n) = clamp(delay_strategy.delay(n, timing), max_delay)
//! ```
//!
//! ## Defaults
//! - `DelayStrategy::default()` → `Combine([BackOff, Random])`.
//! - `default_retry_if()` → [`is_recoverable`].

mod backoff;
mod delay;
mod jitter;
mod predicate;

pub use delay::{DelayFn, DelayStrategy, Timing};
pub use predicate::{default_retry_if, is_recoverable, RetryIf};
