//! Longest monotone subsequences via patience sorting.
//!
//! This crate computes one longest increasing (or decreasing) subsequence of
//! a slice of comparable elements in O(n log n) time and O(n) space, with
//! optional strictness and an optional derived comparison key. It returns
//! either the subsequence's values or its indices into the input.
//!
//! ## Core idea
//! 1. A single left-to-right pass maintains, per achievable run length, the
//!    input index with the smallest key known to end a run of that length
//!    (the tails table, always sorted by key, hence binary-searchable).
//! 2. Each element records a back-pointer to the run it extends.
//! 3. The answer is read off by walking the back-pointers from the index
//!    backing the longest length, then reversing.
//!
//! Decreasing searches reuse the same pass: the requested [`Direction`] is
//! folded into the one comparison function the scan uses, so there is a
//! single code path for both directions.
//!
//! ## Quick start
//! ```
//! use monotone_subseq::longest_increasing_subsequence;
//!
//! let run = longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]);
//! assert_eq!(run, vec![2, 3, 7, 18]);
//! ```
//!
//! Strictness and key extraction go through [`MonotoneSearch`]:
//! ```
//! use monotone_subseq::MonotoneSearch;
//!
//! let seq = [0, 0, 1, 2, 3, 2, 1, 0, 0];
//! assert_eq!(
//!     MonotoneSearch::increasing().strict(true).values(&seq),
//!     vec![0, 1, 2, 3],
//! );
//! ```
//!
//! The result is one longest run among possibly many: deterministic and
//! reproducible for a given input, but no further tie-break is guaranteed.
//! Calls are self-contained and re-entrant; nothing is shared between them.

pub mod engine;
pub mod order;
pub mod search;
mod tails;

pub use crate::order::Direction;
pub use crate::search::{
    longest_decreasing_subsequence, longest_decreasing_subsequence_indices,
    longest_increasing_subsequence, longest_increasing_subsequence_indices, MonotoneSearch,
};
