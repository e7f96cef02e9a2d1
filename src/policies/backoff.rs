//! # Exponential back-off.
//!
//! The delay for attempt `n` (0-indexed) is `base × 2^n`. The result is
//! monotonically non-decreasing in `n` and saturates at [`Duration::MAX`]
//! instead of overflowing, so very large attempt indices are safe.
//!
//! # Example
//! ```text
//! base = 100ms
//! n = 0 → 100ms
//! n = 1 → 200ms
//! n = 2 → 400ms
//! n = 40 → Duration::MAX
//! ```

use std::time::Duration;

/// Computes `base × 2^attempt`, saturating at [`Duration::MAX`].
///
/// A zero base stays zero for every attempt.
pub(crate) fn exponential(base: Duration, attempt: u32) -> Duration {
    if base.is_zero() {
        return Duration::ZERO;
    }
    match 1u32.checked_shl(attempt) {
        Some(factor) => base.checked_mul(factor).unwrap_or(Duration::MAX),
        None => Duration::MAX,
    }
}

/// Returns `base` unchanged for every attempt.
pub(crate) fn fixed(base: Duration, _attempt: u32) -> Duration {
    base
}
