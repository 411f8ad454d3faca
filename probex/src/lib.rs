#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::cargo_common_metadata)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]
#![allow(clippy::uninlined_format_args)]

mod err;
mod key;
mod slot;
mod sort;
mod table;

pub use err::Error;
pub use key::Key;
pub use slot::Slot;
pub use sort::RadixSort;
pub use table::{OrderedIter, ProbeTable};

use std::cmp;

/// Smallest capacity that satisfies the probe-sequence precondition
const MIN_CAPACITY: usize = 4;

/// Builder for sorting a key set and loading it into a [`ProbeTable`]
///
/// Carries the construction-time configuration: the digit count and base
/// that bound the key range for the sorter, and the capacity factor
/// applied when sizing the table. Defaults match the classic setup of
/// five decimal digits and three slots per record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableBuilder {
    /// Maximum number of digit places a key may have
    digits: u32,
    /// Digit base for the radix sort
    base: usize,
    /// Slots allocated per input record
    capacity_factor: usize,
}

impl TableBuilder {
    /// A new builder with default settings: 5 decimal digits, 3 slots
    /// per record.
    pub fn new() -> Self {
        Self {
            digits: 5,
            base: 10,
            capacity_factor: 3,
        }
    }

    /// Select the maximum number of digit places a key may have.
    pub fn digits(&mut self, digits: u32) -> &mut Self {
        self.digits = digits;
        self
    }

    /// Select the digit base for the radix sort.
    pub fn base(&mut self, base: usize) -> &mut Self {
        self.base = base;
        self
    }

    /// Select how many slots to allocate per input record.
    pub fn capacity_factor(&mut self, factor: usize) -> &mut Self {
        self.capacity_factor = factor;
        self
    }

    /// Sort a copy of `keys` and load it into a fresh [`ProbeTable`].
    ///
    /// The first (smallest) key becomes the chain head and every further
    /// key is linked after the slot claimed just before it, so the
    /// table's ordered traversal reproduces the sorted key sequence.
    /// Keys are assumed distinct; duplicates are not rejected but each
    /// occupies its own slot and only one joins the search path usefully.
    ///
    /// The table gets `capacity_factor × keys.len()` slots, raised to the
    /// minimum of 4 that the probe sequence requires. An empty key slice
    /// yields an empty table with no chain head.
    pub fn load<K: Key>(&self, keys: &[K]) -> Result<ProbeTable<K>, Error> {
        let sorter = RadixSort::new(self.base, self.digits)?;
        let mut sorted = keys.to_vec();
        sorter.sort(&mut sorted)?;

        let capacity = cmp::max(
            self.capacity_factor.saturating_mul(keys.len()),
            MIN_CAPACITY,
        );
        let mut table = ProbeTable::new(capacity)?;

        let mut ordered = sorted.iter();
        let Some(&first) = ordered.next() else {
            return Ok(table);
        };
        let mut prev = table.insert_head(first)?;
        for &key in ordered {
            prev = table.insert_after(key, prev)?;
        }
        Ok(table)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort `keys` and load them into a table, using default
/// [`TableBuilder`] settings.
pub fn load<K: Key>(keys: &[K]) -> Result<ProbeTable<K>, Error> {
    TableBuilder::new().load(keys)
}
