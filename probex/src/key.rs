//! Key types accepted by the table and sorter
//!
//! Keys take part in two kinds of arithmetic: modular hashing against the
//! table capacity, and digit extraction during sort passes. Both are done
//! in `usize` space after an infallible widening, so the trait here is
//! mostly a bound plus a pair of conversion helpers.

use num_traits::{NumCast, PrimInt, Unsigned};

/// Types we can use as table keys
///
/// Any unsigned primitive integer qualifies. Signedness is excluded at the
/// type level: the digit passes of the sorter and the modular probe
/// arithmetic are only defined over non-negative values.
pub trait Key: PrimInt + Unsigned {
    /// Build a key from a slot index.
    ///
    /// Panics if the index is not representable in the key type.
    #[inline(always)]
    fn from_index(i: usize) -> Self {
        NumCast::from(i).expect("Key type is always wide enough for a slot index")
    }

    /// Widen this key to a `usize` for hashing and digit extraction.
    ///
    /// Panics if the key does not fit, which cannot happen for key types
    /// no wider than the platform word.
    #[inline(always)]
    fn into_index(self) -> usize {
        self.to_usize()
            .expect("Key always fits in a usize on supported platforms")
    }

    /// Widen this key to a `u64` for derived display values and range
    /// checks.
    #[inline(always)]
    fn into_wide(self) -> u64 {
        self.to_u64().expect("Key type is never wider than 64 bits")
    }
}

impl<T: PrimInt + Unsigned> Key for T {}
