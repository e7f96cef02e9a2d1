//! # Retry predicate.
//!
//! A [`RetryIf`] decides, from the failure an attempt returned, whether the
//! loop may continue. It sees the **classified** failure, so the
//! [`Failure::Terminal`] tag is available to it; the aggregated error never
//! exposes that tag.
//!
//! The default, [`is_recoverable`], retries everything except terminal failures.

use std::sync::Arc;

use crate::error::Failure;

/// Predicate deciding whether a failed attempt may be retried.
pub type RetryIf<E> = Arc<dyn Fn(&Failure<E>) -> bool + Send + Sync>;

/// Default predicate: retry unless the failure was marked unrecoverable.
///
/// # Example
/// ```
/// use retrier::{is_recoverable, unrecoverable, Failure};
///
/// assert!(is_recoverable(&Failure::Transient("timeout")));
/// assert!(!is_recoverable(&unrecoverable("bad credentials")));
/// ```
pub fn is_recoverable<E>(failure: &Failure<E>) -> bool {
    matches!(failure, Failure::Transient(_))
}

/// Returns [`is_recoverable`] as a shareable [`RetryIf`].
pub fn default_retry_if<E: 'static>() -> RetryIf<E> {
    Arc::new(is_recoverable::<E>)
}
