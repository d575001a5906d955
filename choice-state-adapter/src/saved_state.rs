use choice_state::{ChoiceState, Parcel, ParcelError};

/// A snapshot of a controller's choice mode, for restoring UI state across sessions.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    pub in_choice_mode: bool,
    /// `None` if choice mode was never entered.
    pub choice_state: Option<ChoiceState>,
}

impl SavedState {
    /// Writes the choice-mode flag (`0`/`1`) followed by the choice state.
    ///
    /// Nothing is written on error.
    pub fn write_to_parcel(&self, out: &mut Parcel) -> Result<(), ParcelError> {
        let mut state = Parcel::new();
        ChoiceState::write_to_parcel(self.choice_state.as_ref(), &mut state)?;
        out.write_i32(i32::from(self.in_choice_mode));
        for value in state.into_vec() {
            out.write_i32(value);
        }
        Ok(())
    }

    pub fn read_from_parcel(input: &mut Parcel) -> Result<Self, ParcelError> {
        let in_choice_mode = input.read_i32()? != 0;
        let choice_state = ChoiceState::read_from_parcel(input)?;
        Ok(Self {
            in_choice_mode,
            choice_state,
        })
    }
}
