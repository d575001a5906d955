/// Outcome of a binary search over a [`crate::PositionSet`].
///
/// `NotFound` carries the insertion point: the number of stored positions strictly less than the
/// searched value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Search {
    Found(usize),
    NotFound(usize),
}

impl Search {
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound(_) => None,
        }
    }

    /// Index of the first stored position `>= value`.
    pub fn lower_bound(self) -> usize {
        match self {
            Self::Found(index) | Self::NotFound(index) => index,
        }
    }

    /// Index of the first stored position `> value`.
    pub fn upper_bound(self) -> usize {
        match self {
            Self::Found(index) => index + 1,
            Self::NotFound(index) => index,
        }
    }
}

/// A list mutation notification, as delivered by the host adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdapterEvent {
    /// The whole dataset changed; no position correspondence survives.
    Changed,
    /// Items in `[start, start + count)` were replaced in place.
    ItemRangeChanged { start: usize, count: usize },
    /// `count` new items appeared at `start`.
    ItemRangeInserted { start: usize, count: usize },
    /// Items in `[start, start + count)` were deleted.
    ItemRangeRemoved { start: usize, count: usize },
    /// `count` items moved from `from` to `to`. Only `count == 1` is supported.
    ItemRangeMoved { from: usize, to: usize, count: usize },
}

impl AdapterEvent {
    pub fn item_moved(from: usize, to: usize) -> Self {
        Self::ItemRangeMoved { from, to, count: 1 }
    }
}
