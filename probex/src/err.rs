//! Error types for the `probex` crate

use std::collections::TryReserveError;

/// Errors applicable to building, sorting, and loading probe tables
///
/// A failed search is not represented here. Probing for a key that was
/// never inserted is a normal outcome, reported through the option and
/// attempt count returned by [`crate::ProbeTable::search`].
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested table capacity cannot support the probe sequence.
    ///
    /// The third hash function reduces keys modulo `capacity - 3`, so any
    /// capacity of 3 or less would leave it without a positive divisor.
    #[error("table capacity {capacity} is too small, the probe sequence needs at least 4 slots")]
    InvalidCapacity {
        /// The capacity that was requested
        capacity: usize,
    },

    /// The slot array could not be allocated.
    ///
    /// Construction fails without returning a partially built table.
    #[error("failed to allocate the slot array: {0}")]
    Allocation(#[from] TryReserveError),

    /// Every probed slot was already occupied.
    ///
    /// Recoverable by the caller: the record can be rejected, or the load
    /// restarted with a larger table. Previously inserted slots are
    /// unaffected.
    #[error("no unoccupied slot within {capacity} probe attempts, the table is full")]
    TableFull {
        /// Capacity of the table that rejected the insertion
        capacity: usize,
    },

    /// The radix sorter cannot be configured with these parameters.
    ///
    /// Raised for a base below 2, a digit count of zero, or a combination
    /// whose implied key bound overflows.
    #[error("radix sort parameters are unusable: base {base} with {digits} digit(s)")]
    InvalidRadix {
        /// The requested digit base
        base: usize,
        /// The requested number of digit places
        digits: u32,
    },

    /// A key falls outside the sorter's configured digit bound.
    ///
    /// The sort requires this validation up front; its digit passes are
    /// undefined for out-of-range keys.
    #[error("key {key} exceeds the configured maximum of {max_key}")]
    KeyRange {
        /// The offending key, widened for display
        key: u64,
        /// Largest key representable under the configured digit count
        max_key: u64,
    },
}
