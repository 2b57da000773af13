//! The tails table driving the patience-sorting scan.
//!
//! For each achievable run length `L` (1-based), the table knows the input
//! index whose key is the *smallest* (under the effective order) key ending
//! some valid run of length `L` seen so far. Invariant: the keys backing the
//! table entries are sorted ascending in the effective order at all times,
//! which is what makes the binary search in [`extendable_len`] valid.
//!
//! The table stores tail indices only; tail keys are read through the
//! borrowed key slice, so `tail_key[L] == keys[tail_index[L]]` holds by
//! construction. The table grows, never shrinks, and is dropped when the
//! scan that owns it completes.
//!
//! [`extendable_len`]: TailsTable::extendable_len

use std::cmp::Ordering;

use crate::order::Direction;

/// Per-length best-tail table over a borrowed slice of keys.
pub(crate) struct TailsTable<'a, K> {
    keys: &'a [K],
    direction: Direction,
    strict: bool,
    /// `tail_index[L - 1]`: input index ending the best run of length `L`.
    tail_index: Vec<usize>,
}

impl<'a, K: Ord> TailsTable<'a, K> {
    pub(crate) fn new(keys: &'a [K], direction: Direction, strict: bool) -> Self {
        Self {
            keys,
            direction,
            strict,
            tail_index: Vec::new(),
        }
    }

    /// Current number of achievable run lengths.
    pub(crate) fn len(&self) -> usize {
        self.tail_index.len()
    }

    /// Length of the longest run that `curr` can extend: the insertion
    /// position of `curr` among the tail keys.
    ///
    /// Non-strict runs may extend a tail with an equal key (rightmost
    /// insertion position); strict runs may not (leftmost). This is the only
    /// place strictness affects the algorithm.
    pub(crate) fn extendable_len(&self, curr: &K) -> usize {
        self.tail_index.partition_point(|&t| {
            match self.direction.cmp(&self.keys[t], curr) {
                Ordering::Less => true,
                Ordering::Equal => !self.strict,
                Ordering::Greater => false,
            }
        })
    }

    /// Record that input index `i` ends a run of length `p + 1`, where `p`
    /// is the value returned by [`extendable_len`] for its key.
    ///
    /// Appends a new longest length when `p` is the table size; otherwise
    /// replaces the existing tail only when the new key is strictly smaller
    /// under the effective order. Equal or larger keys leave the table
    /// unchanged, which keeps the scan's tie-break reproducible.
    ///
    /// [`extendable_len`]: TailsTable::extendable_len
    pub(crate) fn record(&mut self, p: usize, i: usize) {
        debug_assert!(p <= self.tail_index.len());
        if p == self.tail_index.len() {
            self.tail_index.push(i);
        } else if self
            .direction
            .cmp(&self.keys[i], &self.keys[self.tail_index[p]])
            .is_lt()
        {
            self.tail_index[p] = i;
        }
    }

    /// Input index ending the best run of length `len` (`len >= 1`).
    pub(crate) fn index_ending(&self, len: usize) -> usize {
        self.tail_index[len - 1]
    }

    /// Index backing the longest run found, if any element was recorded.
    pub(crate) fn terminal(&self) -> Option<usize> {
        self.tail_index.last().copied()
    }
}
