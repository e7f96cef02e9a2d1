//! # Retrier: the retry executor.
//!
//! Runs one fallible operation under a [`RetryConfig`]:
//! - re-invokes it until it succeeds, the budget is spent, or the predicate vetoes;
//! - waits between attempts per the delay strategy (clamped to `max_delay`);
//! - returns the value, or a [`RetryError`] carrying the recorded errors.
//!
//! ## Flavors
//! ```text
//! Retrier::run(op)         op: FnMut() -> Result<T, Failure<E>>           std::thread::sleep
//! Retrier::run_async(op)   op: FnMut() -> Future<Result<T, Failure<E>>>   tokio::time::sleep
//! ```
//! Both drive the same [`Attempts`] state machine. `T` covers every call shape:
//! `(body, status)`, `value`, or `()` for error-only operations.
//!
//! ## Rules
//! - Attempts run **sequentially**; one invocation never runs in parallel with itself.
//! - A call blocks (or suspends) during waits; there is no cancellation hook.
//!   Layer deadlines outside, e.g. `tokio::time::timeout(d, retrier.run_async(op))`.
//! - Calls are independent: nothing is carried over from one run to the next.

use std::{fmt::Display, future::Future, thread, time::Duration};

use crate::{
    core::{
        attempts::{Attempts, Step},
        config::{RetryConfig, RetryOption},
    },
    error::{Failure, RetryError},
};

/// Retry executor holding the default configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use retrier::{Failure, Retrier, RetryConfig, RetryOption};
///
/// let retrier = Retrier::new(RetryConfig::new(5, Duration::ZERO, Duration::from_millis(1), false));
///
/// let mut calls = 0;
/// let res = retrier.run(|| {
///     calls += 1;
///     if calls < 3 { Err(Failure::Transient("not yet")) } else { Ok("ok") }
/// });
/// assert_eq!(res.unwrap(), "ok");
/// assert_eq!(calls, 3);
///
/// // Per-call override.
/// let err = retrier
///     .run_with([RetryOption::Attempts(2)], || Err::<(), _>(Failure::Transient("down")))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "All attempts fail:\n#1: down\n#2: down");
/// ```
#[derive(Debug)]
pub struct Retrier<E> {
    defaults: RetryConfig<E>,
}

impl<E: 'static> Default for Retrier<E> {
    /// Executor with [`RetryConfig::default`].
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl<E> Clone for Retrier<E> {
    fn clone(&self) -> Self {
        Self::new(self.defaults.clone())
    }
}

impl<E> Retrier<E> {
    /// Creates an executor with the given defaults.
    pub fn new(defaults: RetryConfig<E>) -> Self {
        Self { defaults }
    }

    /// Returns the default configuration.
    pub fn config(&self) -> &RetryConfig<E> {
        &self.defaults
    }

    /// Runs `op` with the default configuration, blocking the thread between attempts.
    pub fn run<T, F>(&self, op: F) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut() -> Result<T, Failure<E>>,
    {
        execute(&self.defaults, op)
    }

    /// Runs `op` with `options` applied over the defaults.
    pub fn run_with<T, F>(
        &self,
        options: impl IntoIterator<Item = RetryOption<E>>,
        op: F,
    ) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut() -> Result<T, Failure<E>>,
    {
        let cfg = self.defaults.with_options(options);
        execute(&cfg, op)
    }

    /// Runs an async `op` with the default configuration, sleeping on the tokio timer.
    pub async fn run_async<T, F, Fut>(&self, op: F) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Failure<E>>>,
    {
        execute_async(&self.defaults, op).await
    }

    /// Runs an async `op` with `options` applied over the defaults.
    pub async fn run_async_with<T, F, Fut>(
        &self,
        options: impl IntoIterator<Item = RetryOption<E>>,
        op: F,
    ) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Failure<E>>>,
    {
        let cfg = self.defaults.with_options(options);
        execute_async(&cfg, op).await
    }
}

/// Runs `op` with [`RetryConfig::default`], blocking between attempts.
pub fn retry<T, E, F>(op: F) -> Result<T, RetryError<E>>
where
    E: Display + 'static,
    F: FnMut() -> Result<T, Failure<E>>,
{
    execute(&RetryConfig::default(), op)
}

/// Runs an async `op` with [`RetryConfig::default`].
pub async fn retry_async<T, E, F, Fut>(op: F) -> Result<T, RetryError<E>>
where
    E: Display + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Failure<E>>>,
{
    execute_async(&RetryConfig::default(), op).await
}

fn execute<T, E, F>(cfg: &RetryConfig<E>, mut op: F) -> Result<T, RetryError<E>>
where
    E: Display,
    F: FnMut() -> Result<T, Failure<E>>,
{
    let mut state = Attempts::new(cfg);
    while state.is_running() {
        match op() {
            Ok(value) => return Ok(value),
            Err(failure) => match state.fail(failure) {
                Step::Wait(delay) => pause(delay),
                Step::Done => break,
            },
        }
    }
    Err(state.finish())
}

async fn execute_async<T, E, F, Fut>(cfg: &RetryConfig<E>, mut op: F) -> Result<T, RetryError<E>>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Failure<E>>>,
{
    let mut state = Attempts::new(cfg);
    while state.is_running() {
        match op().await {
            Ok(value) => return Ok(value),
            Err(failure) => match state.fail(failure) {
                Step::Wait(delay) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                Step::Done => break,
            },
        }
    }
    Err(state.finish())
}

#[inline]
fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
