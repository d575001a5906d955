//! Choice-mode lifecycle utilities for the `choice-state` crate.
//!
//! The `choice-state` crate is UI-agnostic and focuses on the checked-position math. This crate
//! provides the framework-neutral policy layer adapters commonly need on top of it:
//!
//! - Entering/leaving choice mode, with host observer registration
//! - Bounds-checked check/uncheck/toggle/check-all with listener callbacks
//! - Syncing on-screen views after list mutations
//! - Save/restore of choice mode across sessions
//!
//! This crate is intentionally framework-agnostic; toolkits plug in through [`ChoiceHost`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod host;
mod listener;
mod options;
mod saved_state;

#[cfg(test)]
mod tests;

pub use controller::ChoiceController;
pub use error::ChoiceModeError;
pub use host::{ChoiceHost, ItemId};
pub use listener::ChoiceModeListener;
pub use options::{ChoiceModeOptions, SharedListener};
pub use saved_state::SavedState;
