//! # Random jitter.
//!
//! Adds a uniformly random duration in `[0, max)` to spread out retries of
//! concurrent callers and avoid thundering-herd synchronization.
//!
//! Each call draws from [`rand::rng`], a thread-local generator seeded from
//! the OS, so no two callers share a seeded source.

use rand::Rng;
use std::time::Duration;

/// Random duration in `[0, max)` with nanosecond resolution.
///
/// Returns [`Duration::ZERO`] when `max` is zero.
pub(crate) fn uniform(max: Duration) -> Duration {
    let nanos = u64::try_from(max.as_nanos()).unwrap_or(u64::MAX);
    if nanos == 0 {
        return Duration::ZERO;
    }
    Duration::from_nanos(rand::rng().random_range(0..nanos))
}
