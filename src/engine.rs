//! The monotone subsequence engine: one patience-sorting pass over a key
//! slice, parent back-pointers, and a backward reconstruction.
//!
//! The engine works purely on keys; mapping elements to keys (and indices
//! back to values) is the wrappers' job in [`crate::search`]. Direction is
//! folded into the comparison via [`Direction`], so there is a single code
//! path for increasing and decreasing searches.
//!
//! Complexity: O(n log n) time, O(n) space, single left-to-right pass. The
//! working tables are local to one call; the engine is re-entrant and safe
//! to call from many threads at once.

use crate::order::Direction;
use crate::tails::TailsTable;

/// Indices of one longest monotone run in `keys`, in increasing index order.
///
/// Among equal-length runs the result is the one produced by the
/// left-to-right scan with its replace-on-strictly-smaller tail rule:
/// deterministic and reproducible for a given input, but not guaranteed to
/// be lexicographically smallest or first-occurring.
///
/// ```
/// use monotone_subseq::{engine::monotone_run_indices, Direction};
///
/// let keys = [10, 9, 2, 5, 3, 7, 101, 18];
/// let run = monotone_run_indices(&keys, Direction::Ascending, false);
/// assert_eq!(run, vec![2, 4, 5, 7]);
/// ```
pub fn monotone_run_indices<K: Ord>(
    keys: &[K],
    direction: Direction,
    strict: bool,
) -> Vec<usize> {
    if keys.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("monotone_scan", len = keys.len(), ?direction, strict);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    // prev[i]: index preceding i in the longest run ending at i, set once.
    let mut prev: Vec<Option<usize>> = Vec::with_capacity(keys.len());
    let mut tails = TailsTable::new(keys, direction, strict);

    for (i, curr) in keys.iter().enumerate() {
        let p = tails.extendable_len(curr);
        tails.record(p, i);
        // Slot p - 1 is untouched by the record above, so the link is to the
        // predecessor as established strictly earlier in the pass.
        prev.push(if p > 0 { Some(tails.index_ending(p)) } else { None });
    }

    let Some(terminal) = tails.terminal() else {
        return Vec::new();
    };
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct_run", terminal, run_len = tails.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    reconstruct(&prev, terminal, tails.len())
}

/// Walk `prev` links backward from `terminal`, then reverse into scan order.
/// `run_len` is the known length of the longest run.
fn reconstruct(prev: &[Option<usize>], terminal: usize, run_len: usize) -> Vec<usize> {
    let mut run = Vec::with_capacity(run_len);
    let mut cursor = Some(terminal);
    while let Some(i) = cursor {
        run.push(i);
        cursor = prev[i];
    }
    run.reverse();
    run
}
