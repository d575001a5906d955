use alloc::vec::Vec;

use crate::{AdapterEvent, ChoiceError, PositionSet};

/// The checked positions of a list in choice mode.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter forwards list mutation notifications (`on_item_range_*`) in the order they
///   happened, so checked positions keep pointing at the same logical items.
/// - Every adaptation returns whether the checked set changed, so the adapter can decide
///   whether on-screen views need a refresh.
///
/// For the choice-mode lifecycle (listeners, bounds checks, view syncing), see the
/// `choice-state-adapter` crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceState {
    positions: PositionSet,
}

impl ChoiceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_position_set(PositionSet::with_capacity(capacity))
    }

    pub fn from_position_set(positions: PositionSet) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    pub fn into_position_set(self) -> PositionSet {
        self.positions
    }

    pub fn is_checked(&self, position: usize) -> bool {
        self.positions.contains(position)
    }

    /// Sets the checked state for `position`. Returns `true` if the state changed.
    ///
    /// No bounds checking happens here; that is the caller's policy.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> bool {
        if checked {
            self.positions.add(position)
        } else {
            self.positions.remove(position)
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn checked_count(&self) -> usize {
        self.positions.len()
    }

    /// Checked positions in ascending order.
    pub fn checked_positions(&self) -> Vec<usize> {
        self.positions.to_vec()
    }

    /// Applies one adapter notification and returns whether the checked set changed.
    pub fn apply(&mut self, event: AdapterEvent) -> Result<bool, ChoiceError> {
        let changed = match event {
            AdapterEvent::Changed => self.on_changed(),
            AdapterEvent::ItemRangeChanged { start, count } => {
                self.on_item_range_changed(start, count)
            }
            AdapterEvent::ItemRangeInserted { start, count } => {
                self.on_item_range_inserted(start, count)
            }
            AdapterEvent::ItemRangeRemoved { start, count } => {
                self.on_item_range_removed(start, count)
            }
            AdapterEvent::ItemRangeMoved { from, to, count } => {
                self.on_item_range_moved(from, to, count)?
            }
        };
        ctrace!(?event, changed, checked = self.positions.len(), "ChoiceState::apply");
        Ok(changed)
    }

    /// The whole dataset changed. Returns `true` if anything was checked.
    pub fn on_changed(&mut self) -> bool {
        if self.positions.is_empty() {
            return false;
        }
        self.positions.clear();
        true
    }

    /// Items in `[start, start + count)` got new content; their checks are dropped.
    pub fn on_item_range_changed(&mut self, start: usize, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        let (lo, hi) = self.affected(start, count);
        if lo >= hi {
            return false;
        }
        self.positions.remove_range(lo, hi - lo);
        true
    }

    /// `count` unchecked items were inserted at `start`.
    pub fn on_item_range_inserted(&mut self, start: usize, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        let index = self.positions.index_of(start).lower_bound();
        let len = self.positions.len();
        if index >= len {
            return false;
        }
        self.positions.increase_range(index, len - index, signed(count));
        true
    }

    /// Items in `[start, start + count)` were removed.
    ///
    /// Checks inside the range are dropped, checks after it move up by `count`.
    pub fn on_item_range_removed(&mut self, start: usize, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        let (lo, hi) = self.affected(start, count);
        if lo >= self.positions.len() {
            return false;
        }

        let mut changed = false;
        if lo < hi {
            self.positions.remove_range(lo, hi - lo);
            changed = true;
        }

        let len = self.positions.len();
        if lo < len {
            self.positions.increase_range(lo, len - lo, -signed(count));
            changed = true;
        }
        changed
    }

    /// A single item moved from `from` to `to`.
    pub fn on_item_moved(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }

        let mut changed = false;
        let from_search = self.positions.index_of(from);
        let moved = from_search.found();

        if from < to {
            // Items in (from, to] slide up by one.
            let mut lo = from_search.upper_bound();
            let mut hi = self.positions.index_of(to).upper_bound();
            if let Some(index) = moved {
                self.positions.remove_at(index);
                lo -= 1;
                hi -= 1;
                changed = true;
            }
            if lo < hi {
                self.positions.increase_range(lo, hi - lo, -1);
                changed = true;
            }
        } else {
            // Items in [to, from) slide down by one.
            let lo = self.positions.index_of(to).lower_bound();
            let hi = from_search.lower_bound();
            if let Some(index) = moved {
                self.positions.remove_at(index);
                changed = true;
            }
            if lo < hi {
                self.positions.increase_range(lo, hi - lo, 1);
                changed = true;
            }
        }

        if moved.is_some() {
            self.positions.add(to);
        }
        changed
    }

    /// `count` items moved from `from` to `to`.
    ///
    /// Only single-item moves can be adapted; larger batches are rejected without touching the
    /// checked set.
    pub fn on_item_range_moved(
        &mut self,
        from: usize,
        to: usize,
        count: usize,
    ) -> Result<bool, ChoiceError> {
        if count == 0 || from == to {
            return Ok(false);
        }
        if count != 1 {
            cwarn!(from, to, count, "ChoiceState: multi-item move rejected");
            return Err(ChoiceError::UnsupportedMove { item_count: count });
        }
        Ok(self.on_item_moved(from, to))
    }

    /// Element index range `[lo, hi)` of checked positions inside `[start, start + count)`.
    fn affected(&self, start: usize, count: usize) -> (usize, usize) {
        let lo = self.positions.index_of(start).lower_bound();
        let last = start.saturating_add(count - 1);
        let hi = self.positions.index_of(last).upper_bound();
        (lo, hi)
    }
}

fn signed(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX)
}
