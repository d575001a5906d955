use alloc::vec::Vec;

use crate::{ChoiceState, ParcelError, PositionSet};

/// A flat sequence of `i32` values used to save and restore choice state.
///
/// Writes append; reads consume from a cursor that starts at the front. This mirrors the
/// platform parcels that UI toolkits use for instance-state persistence, without coupling the
/// crate to any of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parcel {
    data: Vec<i32>,
    read_pos: usize,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(data: Vec<i32>) -> Self {
        Self { data, read_pos: 0 }
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Number of values not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.read_pos
    }

    pub fn write_i32(&mut self, value: i32) {
        self.data.push(value);
    }

    pub fn read_i32(&mut self) -> Result<i32, ParcelError> {
        let value = *self
            .data
            .get(self.read_pos)
            .ok_or(ParcelError::UnexpectedEnd)?;
        self.read_pos += 1;
        Ok(value)
    }
}

const ABSENT: i32 = -1;

impl ChoiceState {
    /// Writes `state` as its size followed by the checked positions; `None` is written as `-1`.
    ///
    /// Nothing is written if a size or position does not fit in an `i32`.
    pub fn write_to_parcel(state: Option<&Self>, out: &mut Parcel) -> Result<(), ParcelError> {
        let Some(state) = state else {
            out.write_i32(ABSENT);
            return Ok(());
        };

        let positions = state.positions().as_slice();
        let size = to_i32(positions.len())?;
        let mut encoded = Vec::with_capacity(positions.len() + 1);
        encoded.push(size);
        for &position in positions {
            encoded.push(to_i32(position)?);
        }
        out.data.extend(encoded);
        Ok(())
    }

    /// Reads a state written by [`ChoiceState::write_to_parcel`].
    ///
    /// Positions are trusted to be strictly increasing; they are not re-sorted.
    pub fn read_from_parcel(input: &mut Parcel) -> Result<Option<Self>, ParcelError> {
        let size = input.read_i32()?;
        if size == ABSENT {
            return Ok(None);
        }
        let size = usize::try_from(size).map_err(|_| ParcelError::InvalidSize(size))?;
        if size > input.remaining() {
            return Err(ParcelError::UnexpectedEnd);
        }

        let mut positions = Vec::with_capacity(size);
        for _ in 0..size {
            let value = input.read_i32()?;
            let position =
                usize::try_from(value).map_err(|_| ParcelError::NegativePosition(value))?;
            positions.push(position);
        }
        let positions = PositionSet::from_sorted(positions);
        Ok(Some(Self::from_position_set(positions)))
    }
}

fn to_i32(value: usize) -> Result<i32, ParcelError> {
    i32::try_from(value).map_err(|_| ParcelError::Overflow(value))
}
