use alloc::vec::Vec;

use crate::Search;

const DEFAULT_CAPACITY: usize = 10;

/// A sorted, duplicate-free set of item positions.
///
/// Storage is a single `Vec` kept in ascending order. Lookups are binary searches; insertions
/// and removals shift the tail of the buffer. Capacity grows in "ideal" blocks and never shrinks
/// on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositionSet {
    values: Vec<usize>, // strictly increasing
}

impl Default for PositionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSet {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set able to hold at least `capacity` positions without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(ideal_capacity(capacity)),
        }
    }

    /// Builds a set from positions that are already strictly increasing.
    ///
    /// The input is trusted: it is neither sorted nor deduplicated (debug builds assert).
    pub fn from_sorted(values: Vec<usize>) -> Self {
        debug_assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "PositionSet::from_sorted: input must be strictly increasing"
        );
        let mut set = Self::with_capacity(values.len());
        set.values.extend(values);
        set
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.values.clone()
    }

    /// Drops every position but keeps the allocated capacity.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, value: usize) -> bool {
        self.index_of(value).is_found()
    }

    pub fn index_of(&self, value: usize) -> Search {
        let mut lo = 0usize;
        let mut hi = self.values.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let mid_value = self.values[mid];
            if mid_value < value {
                lo = mid + 1;
            } else if mid_value > value {
                hi = mid;
            } else {
                return Search::Found(mid);
            }
        }
        Search::NotFound(lo)
    }

    /// Inserts `value`. Returns `false` if it was already present.
    pub fn add(&mut self, value: usize) -> bool {
        match self.index_of(value) {
            Search::Found(_) => false,
            Search::NotFound(index) => {
                self.grow_if_full();
                self.values.insert(index, value);
                true
            }
        }
    }

    /// Removes `value`. Returns `false` if it was not present.
    pub fn remove(&mut self, value: usize) -> bool {
        match self.index_of(value) {
            Search::Found(index) => {
                self.remove_at(index);
                true
            }
            Search::NotFound(_) => false,
        }
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) {
        self.values.remove(index);
    }

    /// Removes `count` consecutive elements starting at element index `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + count > len()`.
    pub fn remove_range(&mut self, start: usize, count: usize) {
        self.values.drain(start..start + count);
    }

    /// Adds `delta` to the elements at indexes `[start, start + count)`.
    ///
    /// The caller guarantees that the shifted elements stay non-negative and keep the set
    /// strictly increasing; this is only checked in debug builds.
    pub fn increase_range(&mut self, start: usize, count: usize, delta: isize) {
        let end = start + count;
        for value in &mut self.values[start..end] {
            debug_assert!(
                value.checked_add_signed(delta).is_some(),
                "PositionSet::increase_range: position out of range (value={value}, delta={delta})"
            );
            *value = value.saturating_add_signed(delta);
        }
        debug_assert!(
            start == 0 || count == 0 || self.values[start - 1] < self.values[start],
            "PositionSet::increase_range: shift collides with the previous element"
        );
        debug_assert!(
            end >= self.values.len() || count == 0 || self.values[end - 1] < self.values[end],
            "PositionSet::increase_range: shift collides with the next element"
        );
    }

    fn grow_if_full(&mut self) {
        let len = self.values.len();
        if len < self.values.capacity() {
            return;
        }
        let target = ideal_capacity(grow_size(len));
        self.values.reserve_exact(target.saturating_sub(len));
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = usize;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn grow_size(len: usize) -> usize {
    if len <= 4 {
        8
    } else {
        len.saturating_mul(2)
    }
}

/// Rounds an element count up so that 4-byte elements plus a 12-byte allocation header fill a
/// power-of-two block.
pub(crate) fn ideal_capacity(need: usize) -> usize {
    ideal_byte_size(need.saturating_mul(4)) / 4
}

fn ideal_byte_size(need: usize) -> usize {
    for i in 4..32 {
        let block = (1usize << i) - 12;
        if need <= block {
            return block;
        }
    }
    need
}
