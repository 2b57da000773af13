//! Public wrappers over the engine: direction and strictness as a small
//! builder, output as values or indices, comparison by the element itself or
//! by a derived key.
//!
//! [`MonotoneSearch`] carries the optional configuration (strictness defaults
//! to off); the four free functions at the bottom are the common-case entry
//! points with every option at its default.

use crate::engine::monotone_run_indices;
use crate::order::Direction;

/// Configuration for one longest-monotone-subsequence query.
///
/// ```
/// use monotone_subseq::MonotoneSearch;
///
/// let seq = [0, 0, 1, 2, 3, 2, 1, 0, 0];
/// let plateau = MonotoneSearch::increasing().values(&seq);
/// assert_eq!(plateau, vec![0, 0, 1, 2, 2]);
///
/// let strict = MonotoneSearch::increasing().strict(true).values(&seq);
/// assert_eq!(strict, vec![0, 1, 2, 3]);
/// ```
///
/// Comparison by a derived key:
///
/// ```
/// use monotone_subseq::MonotoneSearch;
///
/// let words = ["A", "B", "CC", "D", "EEE"];
/// let by_len = MonotoneSearch::increasing()
///     .strict(true)
///     .values_by_key(&words, |w| w.len());
/// assert_eq!(by_len, vec!["A", "CC", "EEE"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonotoneSearch {
    direction: Direction,
    strict: bool,
}

impl MonotoneSearch {
    /// A search for the given direction, non-strict.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            strict: false,
        }
    }

    /// Search for the longest increasing run.
    pub fn increasing() -> Self {
        Self::new(Direction::Ascending)
    }

    /// Search for the longest decreasing run.
    pub fn decreasing() -> Self {
        Self::new(Direction::Descending)
    }

    /// Require the run to be strictly monotone (equal keys break the run).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Indices of one longest run, comparing elements by their own order.
    ///
    /// The returned indices are strictly increasing positions into `seq`.
    pub fn indices<T: Ord>(&self, seq: &[T]) -> Vec<usize> {
        monotone_run_indices(seq, self.direction, self.strict)
    }

    /// Indices of one longest run, comparing elements by `key`.
    ///
    /// `key` is called once per element, in input order. A panic from `key`
    /// propagates to the caller; no partial result is returned.
    pub fn indices_by_key<T, K, F>(&self, seq: &[T], key: F) -> Vec<usize>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<K> = seq.iter().map(key).collect();
        monotone_run_indices(&keys, self.direction, self.strict)
    }

    /// Values of one longest run, comparing elements by their own order.
    pub fn values<T: Ord + Clone>(&self, seq: &[T]) -> Vec<T> {
        take_at(seq, self.indices(seq))
    }

    /// Values of one longest run, comparing elements by `key`.
    pub fn values_by_key<T, K, F>(&self, seq: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        take_at(seq, self.indices_by_key(seq, key))
    }
}

fn take_at<T: Clone>(seq: &[T], indices: Vec<usize>) -> Vec<T> {
    indices.into_iter().map(|i| seq[i].clone()).collect()
}

/// The longest non-decreasing subsequence of `seq`, as values.
///
/// ```
/// use monotone_subseq::longest_increasing_subsequence;
///
/// let run = longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]);
/// assert_eq!(run, vec![2, 3, 7, 18]);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    MonotoneSearch::increasing().values(seq)
}

/// The longest non-increasing subsequence of `seq`, as values.
pub fn longest_decreasing_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    MonotoneSearch::decreasing().values(seq)
}

/// The longest non-decreasing subsequence of `seq`, as indices into `seq`.
pub fn longest_increasing_subsequence_indices<T: Ord>(seq: &[T]) -> Vec<usize> {
    MonotoneSearch::increasing().indices(seq)
}

/// The longest non-increasing subsequence of `seq`, as indices into `seq`.
pub fn longest_decreasing_subsequence_indices<T: Ord>(seq: &[T]) -> Vec<usize> {
    MonotoneSearch::decreasing().indices(seq)
}
