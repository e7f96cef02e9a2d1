//! # Retry configuration.
//!
//! Provides [`RetryConfig`], the complete set of knobs for one retry run, and
//! [`RetryOption`], a single per-call override.
//!
//! Config is used in two ways:
//! 1. **Defaults**: built once at startup (`RetryConfig::default()` or
//!    [`RetryConfig::new`]) and held by a [`Retrier`](crate::Retrier).
//! 2. **Per call**: [`RetryConfig::with_options`] clones the defaults and applies
//!    overrides in order; later options win on conflicting fields.
//!
//! No validation happens here. Zero attempts or zero delays are legal values
//! whose effect is defined by the executor.
//!
//! ## Sentinel values
//! - `max_delay = 0s` → no ceiling on computed delays
//! - `attempts = 0` → the operation is never invoked

use std::{fmt, time::Duration};

use crate::{
    error::Failure,
    observers::{self, OnRetry},
    policies::{default_retry_if, DelayStrategy, RetryIf, Timing},
};

/// Configuration of a retry run.
///
/// ## Field semantics
/// - `attempts`: total invocation budget (`0` = never invoke)
/// - `delay`: base delay consumed by the delay strategy
/// - `max_jitter`: exclusive upper bound of random jitter
/// - `max_delay`: ceiling on any computed delay (`0s` = unbounded)
/// - `delay_strategy`: how the wait after attempt `n` is computed
/// - `retry_if`: whether a failure may be retried
/// - `on_retry`: observability callback invoked before each wait
/// - `last_error_only`: keep only the latest error instead of all of them
pub struct RetryConfig<E> {
    /// Total number of invocations allowed.
    pub attempts: u32,

    /// Base delay.
    pub delay: Duration,

    /// Upper bound (exclusive) of random jitter.
    pub max_jitter: Duration,

    /// Ceiling on computed delays; `Duration::ZERO` means unbounded.
    pub max_delay: Duration,

    /// Delay computation.
    pub delay_strategy: DelayStrategy,

    /// Retry predicate.
    pub retry_if: RetryIf<E>,

    /// Callback invoked with `(attempt, &error)` before each wait.
    pub on_retry: OnRetry<E>,

    /// Return only the most recent error instead of the aggregated list.
    pub last_error_only: bool,
}

impl<E> RetryConfig<E> {
    /// Creates a configuration from the four scalar defaults.
    ///
    /// Strategy, predicate and callback take their defaults; `max_delay` is unbounded.
    ///
    /// ### Parameters
    /// - `attempts`: total invocation budget
    /// - `max_jitter`: upper bound of random jitter
    /// - `delay`: base delay
    /// - `last_error_only`: keep only the latest error
    pub fn new(attempts: u32, max_jitter: Duration, delay: Duration, last_error_only: bool) -> Self
    where
        E: 'static,
    {
        Self {
            attempts,
            delay,
            max_jitter,
            last_error_only,
            ..Self::default()
        }
    }

    /// Returns the delay-relevant fields.
    #[inline]
    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            max_jitter: self.max_jitter,
            max_delay: self.max_delay,
        }
    }

    /// Returns the delay ceiling as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(d)` → computed delays are clamped to `d`
    #[inline]
    pub fn max_delay_limit(&self) -> Option<Duration> {
        if self.max_delay.is_zero() {
            None
        } else {
            Some(self.max_delay)
        }
    }

    /// Computes the wait after attempt `attempt`, clamped to [`RetryConfig::max_delay`].
    ///
    /// The clamp applies to every strategy, including custom ones.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let raw = self.delay_strategy.delay(attempt, &self.timing());
        match self.max_delay_limit() {
            Some(max) if raw > max => max,
            _ => raw,
        }
    }

    /// Returns a copy with `options` applied in order.
    ///
    /// ## Example
    /// ```rust
    /// use std::time::Duration;
    /// use retrier::{RetryConfig, RetryOption};
    ///
    /// let defaults: RetryConfig<String> = RetryConfig::default();
    /// let cfg = defaults.with_options([
    ///     RetryOption::Attempts(3),
    ///     RetryOption::Delay(Duration::from_secs(1)),
    ///     RetryOption::Attempts(5),
    /// ]);
    /// assert_eq!(cfg.attempts, 5);
    /// assert_eq!(defaults.attempts, 10);
    /// ```
    pub fn with_options(&self, options: impl IntoIterator<Item = RetryOption<E>>) -> Self {
        let mut cfg = self.clone();
        for option in options {
            option.apply(&mut cfg);
        }
        cfg
    }

    /// Returns a new config with updated attempts.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Returns a new config with updated base delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns a new config with updated jitter bound.
    pub fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Returns a new config with updated delay ceiling.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Returns a new config with updated delay strategy.
    pub fn with_delay_strategy(mut self, strategy: DelayStrategy) -> Self {
        self.delay_strategy = strategy;
        self
    }

    /// Returns a new config with updated retry predicate.
    pub fn with_retry_if<F>(mut self, retry_if: F) -> Self
    where
        F: Fn(&Failure<E>) -> bool + Send + Sync + 'static,
    {
        self.retry_if = std::sync::Arc::new(retry_if);
        self
    }

    /// Returns a new config with updated on-retry callback.
    pub fn with_on_retry<F>(mut self, on_retry: F) -> Self
    where
        F: Fn(u32, &E) + Send + Sync + 'static,
    {
        self.on_retry = std::sync::Arc::new(on_retry);
        self
    }

    /// Returns a new config with updated aggregation mode.
    pub fn with_last_error_only(mut self, last_error_only: bool) -> Self {
        self.last_error_only = last_error_only;
        self
    }
}

impl<E: 'static> Default for RetryConfig<E> {
    /// Default configuration:
    ///
    /// - `attempts = 10`
    /// - `delay = 100ms`
    /// - `max_jitter = 100ms`
    /// - `max_delay = 0s` (unbounded)
    /// - `delay_strategy = Combine([BackOff, Random])`
    /// - `retry_if = is_recoverable`
    /// - `on_retry = noop`
    /// - `last_error_only = false`
    fn default() -> Self {
        Self {
            attempts: 10,
            delay: Duration::from_millis(100),
            max_jitter: Duration::from_millis(100),
            max_delay: Duration::ZERO,
            delay_strategy: DelayStrategy::default(),
            retry_if: default_retry_if(),
            on_retry: observers::noop(),
            last_error_only: false,
        }
    }
}

impl<E> Clone for RetryConfig<E> {
    fn clone(&self) -> Self {
        Self {
            attempts: self.attempts,
            delay: self.delay,
            max_jitter: self.max_jitter,
            max_delay: self.max_delay,
            delay_strategy: self.delay_strategy.clone(),
            retry_if: self.retry_if.clone(),
            on_retry: self.on_retry.clone(),
            last_error_only: self.last_error_only,
        }
    }
}

impl<E> fmt::Debug for RetryConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryConfig")
            .field("attempts", &self.attempts)
            .field("delay", &self.delay)
            .field("max_jitter", &self.max_jitter)
            .field("max_delay", &self.max_delay)
            .field("delay_strategy", &self.delay_strategy)
            .field("last_error_only", &self.last_error_only)
            .finish_non_exhaustive()
    }
}

/// One per-call override of a [`RetryConfig`] field.
pub enum RetryOption<E> {
    /// Overrides [`RetryConfig::attempts`].
    Attempts(u32),
    /// Overrides [`RetryConfig::delay`].
    Delay(Duration),
    /// Overrides [`RetryConfig::max_jitter`].
    MaxJitter(Duration),
    /// Overrides [`RetryConfig::max_delay`].
    MaxDelay(Duration),
    /// Overrides [`RetryConfig::delay_strategy`].
    DelayType(DelayStrategy),
    /// Overrides [`RetryConfig::retry_if`].
    RetryIf(RetryIf<E>),
    /// Overrides [`RetryConfig::on_retry`].
    OnRetry(OnRetry<E>),
    /// Overrides [`RetryConfig::last_error_only`].
    LastErrorOnly(bool),
}

impl<E> RetryOption<E> {
    /// Builds a [`RetryOption::RetryIf`] from a closure.
    pub fn retry_if<F>(f: F) -> Self
    where
        F: Fn(&Failure<E>) -> bool + Send + Sync + 'static,
    {
        RetryOption::RetryIf(std::sync::Arc::new(f))
    }

    /// Builds a [`RetryOption::OnRetry`] from a closure.
    pub fn on_retry<F>(f: F) -> Self
    where
        F: Fn(u32, &E) + Send + Sync + 'static,
    {
        RetryOption::OnRetry(std::sync::Arc::new(f))
    }

    fn apply(self, cfg: &mut RetryConfig<E>) {
        match self {
            RetryOption::Attempts(n) => cfg.attempts = n,
            RetryOption::Delay(d) => cfg.delay = d,
            RetryOption::MaxJitter(d) => cfg.max_jitter = d,
            RetryOption::MaxDelay(d) => cfg.max_delay = d,
            RetryOption::DelayType(s) => cfg.delay_strategy = s,
            RetryOption::RetryIf(f) => cfg.retry_if = f,
            RetryOption::OnRetry(f) => cfg.on_retry = f,
            RetryOption::LastErrorOnly(b) => cfg.last_error_only = b,
        }
    }
}

impl<E> fmt::Debug for RetryOption<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryOption::Attempts(n) => f.debug_tuple("Attempts").field(n).finish(),
            RetryOption::Delay(d) => f.debug_tuple("Delay").field(d).finish(),
            RetryOption::MaxJitter(d) => f.debug_tuple("MaxJitter").field(d).finish(),
            RetryOption::MaxDelay(d) => f.debug_tuple("MaxDelay").field(d).finish(),
            RetryOption::DelayType(s) => f.debug_tuple("DelayType").field(s).finish(),
            RetryOption::RetryIf(_) => f.write_str("RetryIf(..)"),
            RetryOption::OnRetry(_) => f.write_str("OnRetry(..)"),
            RetryOption::LastErrorOnly(b) => f.debug_tuple("LastErrorOnly").field(b).finish(),
        }
    }
}
