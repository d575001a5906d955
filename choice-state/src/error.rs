/// Errors returned by [`crate::ChoiceState`] adaptation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// Simultaneous moves of several items have no single-pass adaptation.
    #[error("moving more than 1 item is not supported (item_count={item_count})")]
    UnsupportedMove { item_count: usize },
}

/// Errors returned while reading or writing a [`crate::Parcel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParcelError {
    #[error("unexpected end of parcel")]
    UnexpectedEnd,
    #[error("invalid choice state size: {0}")]
    InvalidSize(i32),
    #[error("negative position in parcel: {0}")]
    NegativePosition(i32),
    #[error("value does not fit in an i32: {0}")]
    Overflow(usize),
}
