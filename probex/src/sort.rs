//! Least-significant-digit radix sort over counting-sort passes
//!
//! Keys are sorted before they ever reach the table, so the order chain
//! built during insertion comes out ascending without any comparisons at
//! insert time. The sorter is configured once with a digit base and a
//! digit count; both together bound the key range it accepts.

use crate::err::Error;
use crate::key::Key;

/// Configured least-significant-digit radix sorter
///
/// Each pass is a stable counting sort on one digit place: a histogram of
/// digit occurrences, a prefix-sum turning counts into positions, and a
/// right-to-left scatter so equal digits keep their original relative
/// order. Running time is Θ(passes × (n + base)).
///
/// The configuration is held by the instance, not by process-wide state,
/// so sorters with different parameters can coexist.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RadixSort {
    /// Number of distinct digit values, and the histogram width, per pass
    base: usize,
    /// Largest digit place value: the smallest power of `base` with the
    /// configured number of digits
    max_place: usize,
    /// Largest key representable under the configured digit count
    max_key: u64,
}

impl RadixSort {
    /// Configure a sorter for keys of up to `digits` places in `base`.
    ///
    /// Fails with [`Error::InvalidRadix`] when `base < 2`, when `digits`
    /// is zero, or when `base^digits` overflows the key bound arithmetic.
    pub fn new(base: usize, digits: u32) -> Result<Self, Error> {
        if base < 2 || digits == 0 {
            return Err(Error::InvalidRadix { base, digits });
        }
        let invalid = || Error::InvalidRadix { base, digits };
        let max_place = base.checked_pow(digits - 1).ok_or_else(invalid)?;
        let max_key = (base as u64)
            .checked_pow(digits)
            .and_then(|bound| bound.checked_sub(1))
            .ok_or_else(invalid)?;
        Ok(Self {
            base,
            max_place,
            max_key,
        })
    }

    /// The configured digit base.
    pub fn base(&self) -> usize {
        self.base
    }

    /// The largest key this sorter accepts.
    pub fn max_key(&self) -> u64 {
        self.max_key
    }

    /// Extract the digit of `key` at the given place value.
    #[inline(always)]
    fn digit<K: Key>(&self, key: K, place: usize) -> usize {
        (key.into_index() / place) % self.base
    }

    /// One stable counting-sort pass on the digit at `place`.
    ///
    /// Writes the reordered keys into `out`. For keys whose digits at
    /// `place` are equal, the relative order of `keys` is preserved; the
    /// stability is what makes the digit passes compose into a full sort.
    ///
    /// Panics if `out` is not the same length as `keys` or if `place`
    /// is zero.
    pub fn counting_sort_pass<K: Key>(&self, keys: &[K], out: &mut [K], place: usize) {
        assert_eq!(keys.len(), out.len());
        assert!(place >= 1);

        // Histogram of digit occurrences
        let mut counts = vec![0_usize; self.base];
        for &key in keys {
            counts[self.digit(key, place)] += 1;
        }

        // Prefix sums: counts[d] becomes the number of keys with a digit
        // less than or equal to d
        for digit in 1..self.base {
            counts[digit] += counts[digit - 1];
        }

        // Scatter right to left so equal digits keep their input order
        for &key in keys.iter().rev() {
            let digit = self.digit(key, place);
            counts[digit] -= 1;
            out[counts[digit]] = key;
        }
    }

    /// Sort `keys` into ascending order in place.
    ///
    /// Every key is validated against the configured bound before the
    /// first pass runs; an out-of-range key fails with
    /// [`Error::KeyRange`] and leaves `keys` untouched. Digit passes then
    /// run for `place = 1, base, base², …` up to the configured digit
    /// count, ping-ponging through one scratch buffer.
    pub fn sort<K: Key>(&self, keys: &mut [K]) -> Result<(), Error> {
        for &key in keys.iter() {
            let wide = key.into_wide();
            if wide > self.max_key {
                return Err(Error::KeyRange {
                    key: wide,
                    max_key: self.max_key,
                });
            }
        }

        let mut scratch = vec![K::zero(); keys.len()];
        let mut place = 1_usize;
        while place <= self.max_place {
            self.counting_sort_pass(keys, &mut scratch, place);
            keys.copy_from_slice(&scratch);
            place = match place.checked_mul(self.base) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(())
    }
}
