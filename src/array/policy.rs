//! Capacity management policy for the dynamic array.
//!
//! The policy is kept free of any storage so that the growth and shrink
//! rules can be reasoned about (and tested) on plain integers. The array
//! consults [`decide`] before every structural mutation and then applies
//! [`expanded`] or [`shrunk`] to its current capacity.

/// Factor by which capacity grows on expansion.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity shrinks once the logical size falls to `capacity / SHRINK_THRESHOLD_DIVISOR`.
pub const SHRINK_THRESHOLD_DIVISOR: usize = 4;

/// The outcome of evaluating the resize policy against a prospective size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Storage must grow before the mutation.
    Expand,
    /// Usage is low enough that storage should be halved.
    Shrink,
    /// Capacity stays as it is.
    Keep,
}

/// Decides what to do with `capacity` given the logical size the array is
/// about to have.
///
/// Growth triggers as soon as the new size reaches capacity, so a full array
/// is always expanded on the next insertion. Shrinking only happens on the
/// exact quarter mark and never for an empty array.
pub fn decide(new_len: usize, capacity: usize) -> Resize {
    if new_len >= capacity {
        Resize::Expand
    } else if new_len > 0 && new_len == capacity / SHRINK_THRESHOLD_DIVISOR {
        Resize::Shrink
    } else {
        Resize::Keep
    }
}

/// Capacity after one expansion step.
pub fn expanded(capacity: usize) -> usize {
    if capacity == 0 {
        1
    } else {
        capacity.saturating_mul(GROWTH_FACTOR)
    }
}

/// Capacity after one shrink step. A capacity of one is the floor.
pub fn shrunk(capacity: usize) -> usize {
    if capacity >= 2 {
        capacity / GROWTH_FACTOR
    } else {
        capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_from_empty() {
        assert_eq!(expanded(0), 1);
        assert_eq!(expanded(1), 2);
        assert_eq!(expanded(2), 4);
        assert_eq!(expanded(512), 1024);
    }

    #[test]
    fn test_expand_saturates() {
        assert_eq!(expanded(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_shrink_halves_down_to_one() {
        assert_eq!(shrunk(16), 8);
        assert_eq!(shrunk(3), 1);
        assert_eq!(shrunk(2), 1);
        assert_eq!(shrunk(1), 1);
        assert_eq!(shrunk(0), 0);
    }

    #[test]
    fn test_decide_expands_when_full() {
        assert_eq!(decide(1, 0), Resize::Expand);
        assert_eq!(decide(2, 2), Resize::Expand);
        // Bulk inserts can ask for more than the current capacity
        assert_eq!(decide(9, 2), Resize::Expand);
        assert_eq!(decide(0, 0), Resize::Expand);
    }

    #[test]
    fn test_decide_shrinks_on_quarter_mark() {
        assert_eq!(decide(2, 8), Resize::Shrink);
        assert_eq!(decide(1, 4), Resize::Shrink);
        assert_eq!(decide(1, 7), Resize::Shrink);
    }

    #[test]
    fn test_decide_keeps_otherwise() {
        assert_eq!(decide(3, 8), Resize::Keep);
        assert_eq!(decide(1, 8), Resize::Keep);
        // Never shrink to satisfy an empty array
        assert_eq!(decide(0, 2), Resize::Keep);
        assert_eq!(decide(0, 3), Resize::Keep);
    }
}
