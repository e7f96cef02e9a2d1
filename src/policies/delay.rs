//! # Delay strategies for retry waits.
//!
//! [`DelayStrategy`] computes how long to wait after attempt `n` (0-indexed,
//! the attempt that just failed) from the [`Timing`] parameters of a
//! [`RetryConfig`](crate::RetryConfig).
//!
//! - [`DelayStrategy::Fixed`] — always the base delay
//! - [`DelayStrategy::BackOff`] — `delay × 2^n`
//! - [`DelayStrategy::Random`] — uniform random in `[0, max_jitter)`
//! - [`DelayStrategy::Combine`] — sum of several strategies
//! - [`DelayStrategy::Custom`] — any caller-supplied function
//!
//! The default is `Combine([BackOff, Random])`: exponential back-off plus jitter.
//!
//! The `max_delay` ceiling is **not** applied here; the configuration clamps
//! the raw value uniformly for every strategy
//! (see [`RetryConfig::delay_for`](crate::RetryConfig::delay_for)).
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retrier::{DelayStrategy, Timing};
//!
//! let timing = Timing {
//!     delay: Duration::from_millis(100),
//!     max_jitter: Duration::ZERO,
//!     max_delay: Duration::ZERO,
//! };
//!
//! let strategy = DelayStrategy::Combine(vec![DelayStrategy::BackOff, DelayStrategy::Fixed]);
//! // 100ms × 2^2 + 100ms
//! assert_eq!(strategy.delay(2, &timing), Duration::from_millis(500));
//! ```

use std::{fmt, sync::Arc, time::Duration};

use crate::policies::{backoff, jitter};

/// Caller-supplied delay function: `(attempt, timing) -> wait`.
pub type DelayFn = Arc<dyn Fn(u32, &Timing) -> Duration + Send + Sync>;

/// Delay-relevant subset of a [`RetryConfig`](crate::RetryConfig).
///
/// ## Field semantics
/// - `delay`: base unit for [`DelayStrategy::Fixed`] and [`DelayStrategy::BackOff`]
/// - `max_jitter`: exclusive upper bound for [`DelayStrategy::Random`]
/// - `max_delay`: ceiling applied after the strategy (`0` = unbounded)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    /// Base delay.
    pub delay: Duration,
    /// Upper bound (exclusive) of random jitter.
    pub max_jitter: Duration,
    /// Ceiling for any computed delay; `Duration::ZERO` disables it.
    pub max_delay: Duration,
}

/// Strategy computing the wait between two attempts.
#[derive(Clone)]
pub enum DelayStrategy {
    /// The base delay, unchanged for every attempt.
    Fixed,
    /// Exponential back-off: `delay × 2^attempt`, saturating.
    BackOff,
    /// Uniform random duration in `[0, max_jitter)`.
    Random,
    /// Sum of the member strategies' outputs (saturating).
    Combine(Vec<DelayStrategy>),
    /// Caller-supplied function.
    Custom(DelayFn),
}

impl Default for DelayStrategy {
    /// Returns `Combine([BackOff, Random])`.
    fn default() -> Self {
        DelayStrategy::Combine(vec![DelayStrategy::BackOff, DelayStrategy::Random])
    }
}

impl fmt::Debug for DelayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayStrategy::Fixed => f.write_str("Fixed"),
            DelayStrategy::BackOff => f.write_str("BackOff"),
            DelayStrategy::Random => f.write_str("Random"),
            DelayStrategy::Combine(parts) => f.debug_tuple("Combine").field(parts).finish(),
            DelayStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl DelayStrategy {
    /// Wraps a function as [`DelayStrategy::Custom`].
    ///
    /// ## Example
    /// ```rust
    /// use std::time::Duration;
    /// use retrier::{DelayStrategy, Timing};
    ///
    /// // Linear: 2s, 4s, 6s...
    /// let linear = DelayStrategy::custom(|n, _timing: &Timing| Duration::from_secs(2 * (u64::from(n) + 1)));
    /// assert_eq!(linear.delay(1, &Timing::default()), Duration::from_secs(4));
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(u32, &Timing) -> Duration + Send + Sync + 'static,
    {
        DelayStrategy::Custom(Arc::new(f))
    }

    /// Sums the given strategies.
    pub fn combine(parts: impl IntoIterator<Item = DelayStrategy>) -> Self {
        DelayStrategy::Combine(parts.into_iter().collect())
    }

    /// Computes the raw (unclamped) delay after attempt `attempt`.
    pub fn delay(&self, attempt: u32, timing: &Timing) -> Duration {
        match self {
            DelayStrategy::Fixed => backoff::fixed(timing.delay, attempt),
            DelayStrategy::BackOff => backoff::exponential(timing.delay, attempt),
            DelayStrategy::Random => jitter::uniform(timing.max_jitter),
            DelayStrategy::Combine(parts) => parts.iter().fold(Duration::ZERO, |acc, part| {
                acc.saturating_add(part.delay(attempt, timing))
            }),
            DelayStrategy::Custom(f) => f(attempt, timing),
        }
    }
}
