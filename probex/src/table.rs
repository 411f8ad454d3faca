//! Fixed-capacity open-addressing table with an order-preserving chain
//!
//! The table moves through two phases: a load phase that accepts
//! insertions in strictly ascending key order, then a query phase of
//! searches and statistics. Nothing enforces the transition at the type
//! level; it falls out of the callers, which finish loading before they
//! start querying, and nothing ever deletes or resizes.

use crate::err::Error;
use crate::key::Key;
use crate::slot::Slot;

/// Open-addressing hash table whose slots double as a sorted linked list
///
/// Collisions are resolved by a composite probe sequence built from three
/// hash functions:
///
/// ```text
/// probe(key, i) = (h1(key) + i*h2(key) + i*i*h3(key)) mod capacity
/// h1(key) = key mod capacity
/// h2(key) = 1 + key mod (capacity - 1)
/// h3(key) = 1 + key mod (capacity - 3)
/// ```
///
/// This pseudo triple hashing scheme is not guaranteed to visit all
/// `capacity` slots before repeating, so an insertion can fail even when
/// unoccupied slots remain. That is an accepted limitation of the scheme,
/// not something the table tries to repair; the construction-time
/// capacity check only guards the divisors of `h2` and `h3`. Oversizing
/// the table (see [`ProbeTable::for_records`]) keeps the failure mode
/// rare in practice.
#[derive(Clone, Debug)]
pub struct ProbeTable<K: Key> {
    /// The slot arena; order links are indices into this same array
    slots: Box<[Slot<K>]>,
    /// Index of the slot holding the smallest key, once one exists
    head: Option<usize>,
    /// Number of successful insertions so far
    occupied: usize,
}

impl<K: Key> ProbeTable<K> {
    /// A new table with exactly `capacity` slots.
    ///
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is 3 or
    /// less, and with [`Error::Allocation`] when the slot array cannot be
    /// allocated. No partially constructed table is ever returned.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity <= 3 {
            return Err(Error::InvalidCapacity { capacity });
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, Slot::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: None,
            occupied: 0,
        })
    }

    /// A new table sized for the expected number of records.
    ///
    /// Allocates three slots per record. The headroom lowers the
    /// collision rate; it is a recommendation inherited from the original
    /// sizing scheme, not a correctness requirement.
    pub fn for_records(records: usize) -> Result<Self, Error> {
        Self::new(records.saturating_mul(3))
    }

    /// Total number of slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots, equal to the number of successful
    /// insertions.
    #[inline(always)]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Index of the slot holding the smallest key, or `None` before the
    /// first insertion.
    #[inline(always)]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Read-only view of every slot, occupied or not, in arena order.
    ///
    /// Intended for presentation layers that render the whole table.
    #[inline(always)]
    pub fn slots(&self) -> &[Slot<K>] {
        &self.slots
    }

    /// First hash: the key reduced modulo the capacity.
    #[inline(always)]
    fn hash1(&self, key: K) -> usize {
        key.into_index() % self.capacity()
    }

    /// Second hash, the linear probe stride. Never zero.
    #[inline(always)]
    fn hash2(&self, key: K) -> usize {
        1 + key.into_index() % (self.capacity() - 1)
    }

    /// Third hash, the quadratic probe stride. Never zero; the divisor is
    /// positive because construction requires more than 3 slots.
    #[inline(always)]
    fn hash3(&self, key: K) -> usize {
        1 + key.into_index() % (self.capacity() - 3)
    }

    /// The slot index probed for `key` on attempt `i`.
    ///
    /// A pure function of the key, the attempt number, and the capacity.
    #[inline(always)]
    pub fn probe_index(&self, key: K, i: usize) -> usize {
        (self.hash1(key) + i * self.hash2(key) + i * i * self.hash3(key)) % self.capacity()
    }

    /// Probe for `key` and claim the first unoccupied slot.
    ///
    /// At probe index zero the target slot's first-probe counter is
    /// bumped whether or not that attempt succeeds; it feeds the
    /// chain-length monitoring statistics only. On success the slot gets
    /// the key, its attempt count, and the occupancy flag, and the
    /// table's occupied count grows by one.
    fn claim(&mut self, key: K) -> Result<usize, Error> {
        for i in 0..self.capacity() {
            let index = self.probe_index(key, i);
            if i == 0 {
                self.slots[index].count_first_probe();
            }
            if !self.slots[index].is_occupied() {
                let slot = &mut self.slots[index];
                slot.set_key(key);
                slot.set_insert_attempts(i + 1);
                slot.mark_occupied(true);
                self.occupied += 1;
                return Ok(index);
            }
        }
        Err(Error::TableFull {
            capacity: self.capacity(),
        })
    }

    /// Insert the first, smallest key and make its slot the chain head.
    ///
    /// Returns the claimed slot index, to be threaded through the
    /// [`Self::insert_after`] calls for the remaining keys.
    pub fn insert_head(&mut self, key: K) -> Result<usize, Error> {
        let index = self.claim(key)?;
        self.head = Some(index);
        Ok(index)
    }

    /// Insert the next key in ascending order and link it after `prev`.
    ///
    /// `prev` must be the index returned by the previous successful
    /// insertion; that is what makes the chain reflect ascending key
    /// order. On a full table the error is returned before any link is
    /// written.
    ///
    /// Panics if `prev` is out of range.
    pub fn insert_after(&mut self, key: K, prev: usize) -> Result<usize, Error> {
        let index = self.claim(key)?;
        self.slots[prev].set_next(Some(index));
        Ok(index)
    }

    /// Probe for `key`, returning the slot if found and the number of
    /// attempts consumed either way.
    ///
    /// The search stops early at the first unoccupied slot it probes.
    /// That short-circuit is sound only because slots are never vacated;
    /// an empty slot on the probe path proves the key was never inserted.
    /// A miss is a normal outcome, not an error.
    pub fn search(&self, key: K) -> (Option<&Slot<K>>, usize) {
        let mut attempts = 0;
        for i in 0..self.capacity() {
            let index = self.probe_index(key, i);
            attempts += 1;
            let slot = &self.slots[index];
            if !slot.is_occupied() {
                return (None, attempts);
            }
            if slot.key() == key {
                return (Some(slot), attempts);
            }
        }
        (None, attempts)
    }

    /// Walk the occupied slots in ascending key order.
    ///
    /// Starts at the head slot and follows the order links lazily. Each
    /// call starts a fresh traversal.
    pub fn iter_ordered(&self) -> OrderedIter<'_, K> {
        OrderedIter {
            slots: &self.slots,
            cursor: self.head,
        }
    }

    /// The largest first-probe count over all slots.
    ///
    /// Estimates the longest chain a separate-chaining table with the
    /// same first hash would have built. Monitoring only.
    pub fn longest_first_probe_chain(&self) -> usize {
        self.slots
            .iter()
            .map(Slot::first_probe_hits)
            .max()
            .unwrap_or(0)
    }

    /// Number of slots whose first-probe count equals `value`.
    pub fn count_first_probe_hits(&self, value: usize) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.first_probe_hits() == value)
            .count()
    }

    /// Number of slots that were a first probe target at least once.
    ///
    /// Under a hypothetical chaining scheme this is the number of
    /// non-empty buckets.
    pub fn first_probe_targets(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.first_probe_hits() >= 1)
            .count()
    }
}

/// Lazy walk of the ascending-order slot chain
///
/// Created by [`ProbeTable::iter_ordered`]. Yields each slot and then
/// follows its order link until the end of the chain.
pub struct OrderedIter<'a, K: Key> {
    /// The table's slot arena
    slots: &'a [Slot<K>],
    /// Index of the next slot to yield, `None` once the chain ends
    cursor: Option<usize>,
}

impl<'a, K: Key> Iterator for OrderedIter<'a, K> {
    type Item = &'a Slot<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = &self.slots[index];
        self.cursor = slot.next();
        Some(slot)
    }
}
