//! Headless choice-mode (multi-select) state for list widgets.
//!
//! For the choice-mode lifecycle (listeners, bounds checks, view syncing), see the
//! `choice-state-adapter` crate.
//!
//! This crate focuses on the core algorithm: a sorted sparse set of checked positions that is
//! remapped under list mutations (range changed, inserted, removed, single item moved) so that
//! checks keep following the same logical items.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to forward:
//! - adapter mutation notifications, in the order they happened
//! - user check/uncheck actions
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod choice_state;
mod error;
mod parcel;
mod position_set;
mod types;


pub use choice_state::ChoiceState;
pub use error::{ChoiceError, ParcelError};
pub use parcel::Parcel;
pub use position_set::PositionSet;
pub use types::{AdapterEvent, Search};
