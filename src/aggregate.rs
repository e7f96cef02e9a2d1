//! # Per-attempt error aggregation.
//!
//! [`AttemptErrors`] keeps the error of every failed attempt in attempt order.
//! Slots are addressed by the 0-based attempt index; an attempt that was never
//! made leaves its slot empty, and empty slots are skipped when rendering.
//!
//! In *last-error-only* mode a single slot is kept and overwritten by each
//! failure, remembering which attempt produced it.
//!
//! ## Rendering
//! ```text
//! All attempts fail:
//! #1: connection refused
//! #2: connection refused
//! #3: 503 service unavailable
//! ```

use std::fmt;

/// Ordered collection of per-attempt errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptErrors<E> {
    slots: Vec<Option<E>>,
    last_only: bool,
    last_attempt: Option<u32>,
}

impl<E> AttemptErrors<E> {
    /// Creates an empty collection sized for `attempts` attempts.
    ///
    /// Slots are allocated lazily as errors are recorded, so a huge budget
    /// costs nothing up front.
    pub fn new(attempts: u32, last_error_only: bool) -> Self {
        let hint = if last_error_only {
            1
        } else {
            attempts.min(16) as usize
        };
        Self {
            slots: Vec::with_capacity(hint),
            last_only: last_error_only,
            last_attempt: None,
        }
    }

    /// Records the error of attempt `index` (0-based).
    ///
    /// In last-error-only mode the single slot is overwritten.
    pub fn record(&mut self, index: u32, error: E) {
        self.last_attempt = Some(index);
        let slot = if self.last_only { 0 } else { index as usize };
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(error);
    }

    /// Number of recorded (non-empty) slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether this collection keeps only the latest error.
    pub fn is_last_error_only(&self) -> bool {
        self.last_only
    }

    /// 0-based index of the most recently recorded attempt.
    pub fn last_attempt(&self) -> Option<u32> {
        self.last_attempt
    }

    /// Iterates `(attempt_number, error)` pairs, 1-based, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (i + 1, e)))
    }

    /// The most recently recorded error.
    pub fn last(&self) -> Option<&E> {
        self.slots.iter().rev().find_map(Option::as_ref)
    }

    /// Consumes the collection, returning recorded errors in attempt order.
    pub fn into_vec(self) -> Vec<E> {
        self.slots.into_iter().flatten().collect()
    }

    /// Removes and returns the most recent error with its 0-based attempt index.
    pub(crate) fn take_last(&mut self) -> Option<(u32, E)> {
        let index = self.last_attempt?;
        let slot = if self.last_only { 0 } else { index as usize };
        self.slots.get_mut(slot)?.take().map(|e| (index, e))
    }
}

impl<E: fmt::Display> fmt::Display for AttemptErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("All attempts fail:")?;
        for (n, error) in self.iter() {
            write!(f, "\n#{n}: {error}")?;
        }
        Ok(())
    }
}
