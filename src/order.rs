//! Ordering direction and the effective comparison used by the engine.
//!
//! The engine always searches for the longest run that is non-decreasing
//! (or strictly increasing, under the strict option) in the *effective*
//! order. Rather than wrapping values in an order-reversing adapter, the
//! requested direction is folded into a single comparison function that the
//! binary search and the tail-replacement rule both go through. This halves
//! the algorithmic surface to one code path: a decreasing search is an
//! increasing search under [`Direction::Descending`].

use std::cmp::Ordering;

/// Direction of the monotone run being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Keys along the run are non-decreasing (increasing, under strict).
    Ascending,
    /// Keys along the run are non-increasing (decreasing, under strict).
    Descending,
}

impl Direction {
    /// Compare two keys under the effective order for this direction.
    ///
    /// `Ascending` is the key type's own order; `Descending` is that order
    /// reversed. Equal keys compare equal in both directions.
    #[inline]
    pub fn cmp<K: Ord>(self, a: &K, b: &K) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(b),
            Direction::Descending => b.cmp(a),
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::Direction;

    #[test]
    fn ascending_is_natural_order() {
        assert_eq!(Direction::Ascending.cmp(&1, &2), Ordering::Less);
        assert_eq!(Direction::Ascending.cmp(&2, &1), Ordering::Greater);
        assert_eq!(Direction::Ascending.cmp(&2, &2), Ordering::Equal);
    }

    #[test]
    fn descending_inverts_strict_comparisons_only() {
        assert_eq!(Direction::Descending.cmp(&1, &2), Ordering::Greater);
        assert_eq!(Direction::Descending.cmp(&2, &1), Ordering::Less);
        // Equality is direction-independent.
        assert_eq!(Direction::Descending.cmp(&2, &2), Ordering::Equal);
    }

    #[test]
    fn reversed_round_trips() {
        assert_eq!(Direction::Ascending.reversed(), Direction::Descending);
        assert_eq!(Direction::Descending.reversed().reversed(), Direction::Descending);
    }
}
