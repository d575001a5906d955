use choice_state::{ChoiceError, ParcelError};

/// Errors returned by [`crate::ChoiceController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceModeError {
    #[error("a host must be attached before entering choice mode")]
    NoHost,
    #[error("already in choice mode")]
    AlreadyInChoiceMode,
    #[error("not in choice mode; call enter_choice_mode() first")]
    NotInChoiceMode,
    #[error("position out of range: position={position}, count={count}")]
    OutOfRange { position: usize, count: usize },
    #[error(transparent)]
    Choice(#[from] ChoiceError),
    #[error(transparent)]
    Parcel(#[from] ParcelError),
}
