//! One cell of the probe table
//!
//! A slot stores its key together with a derived display value, two
//! monitoring counters, an occupancy flag, and an optional order link.
//! The link is an index into the same slot array the slot lives in, never
//! a pointer, so a slot on its own is inert data: all invariants about
//! occupancy and chain shape are enforced by [`crate::ProbeTable`], which
//! is the only code that can mutate a slot.

use crate::key::Key;

/// A single hash table cell
///
/// Once a slot is occupied it stays occupied; the table supports no
/// deletion. The order link is set at most once, when the next key in
/// ascending order claims its own slot.
#[derive(Clone, Debug)]
pub struct Slot<K: Key> {
    /// The stored key, `K::zero()` until the slot is claimed
    key: K,
    /// Derived display value, always `key * 10`
    ///
    /// Held as a `u64` so the derived value cannot overflow a key type
    /// narrower than 64 bits.
    display_key: u64,
    /// Number of probe attempts consumed to place the key here
    insert_attempts: usize,
    /// Times this slot was probe target zero for some key
    ///
    /// Monitoring only: estimates the chain length this slot would carry
    /// under a separate-chaining scheme. Never read by the open-addressing
    /// logic itself.
    first_probe_hits: usize,
    /// Whether a key has been placed in this slot
    occupied: bool,
    /// Index of the slot holding the next key in ascending order
    next: Option<usize>,
}

impl<K: Key> Slot<K> {
    /// An empty, unoccupied, unlinked slot.
    pub(crate) fn new() -> Self {
        Self {
            key: K::zero(),
            display_key: 0,
            insert_attempts: 0,
            first_probe_hits: 0,
            occupied: false,
            next: None,
        }
    }

    /// The stored key.
    #[inline(always)]
    pub fn key(&self) -> K {
        self.key
    }

    /// The derived display value, ten times the stored key.
    #[inline(always)]
    pub fn display_key(&self) -> u64 {
        self.display_key
    }

    /// Number of probe attempts consumed to place the key on insertion.
    #[inline(always)]
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts
    }

    /// Times this slot was the first probe target for some key.
    #[inline(always)]
    pub fn first_probe_hits(&self) -> usize {
        self.first_probe_hits
    }

    /// Whether a key has been placed in this slot.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Index of the slot holding the next key in ascending order, if any.
    #[inline(always)]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Store a key, recomputing the display value.
    #[inline(always)]
    pub(crate) fn set_key(&mut self, key: K) {
        self.key = key;
        self.display_key = key.into_wide() * 10;
    }

    /// Record the occupancy flag.
    #[inline(always)]
    pub(crate) fn mark_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Record how many probes the initial insertion consumed.
    #[inline(always)]
    pub(crate) fn set_insert_attempts(&mut self, attempts: usize) {
        self.insert_attempts = attempts;
    }

    /// Count one probe attempt that targeted this slot at probe index
    /// zero, whether or not the attempt claimed it.
    #[inline(always)]
    pub(crate) fn count_first_probe(&mut self) {
        self.first_probe_hits += 1;
    }

    /// Link this slot to the one claimed immediately after it.
    #[inline(always)]
    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}

impl<K: Key> Default for Slot<K> {
    fn default() -> Self {
        Self::new()
    }
}
