use alloc::sync::Arc;
use alloc::vec::Vec;

use choice_state::{AdapterEvent, ChoiceState};

use crate::{ChoiceHost, ChoiceModeError, ChoiceModeListener, ChoiceModeOptions, SavedState};

/// A framework-neutral controller that adds choice mode (multi-select) to a list host.
///
/// This type does not hold any UI objects itself; the host (`H`) owns items and views. Adapters
/// drive it by calling:
/// - `enter_choice_mode` / `exit_choice_mode` for the lifecycle
/// - `set_item_checked` / `toggle_item_checked` / `check_all` on user actions
/// - `notify(event)` for every adapter mutation while the host observer is registered
/// - `on_view_attached(position)` when a view is bound on screen
///
/// Choice-mode queries and mutators fail with [`ChoiceModeError::NotInChoiceMode`] while choice
/// mode is off.
#[derive(Clone, Debug)]
pub struct ChoiceController<H> {
    host: Option<H>,
    state: Option<ChoiceState>,
    in_choice_mode: bool,
    options: ChoiceModeOptions,
}

impl<H: ChoiceHost> ChoiceController<H> {
    pub fn new(options: ChoiceModeOptions) -> Self {
        Self {
            host: None,
            state: None,
            in_choice_mode: false,
            options,
        }
    }

    pub fn with_host(host: H, options: ChoiceModeOptions) -> Self {
        Self {
            host: Some(host),
            ..Self::new(options)
        }
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Replaces the host, leaving choice mode first if it is on. Returns the previous host.
    pub fn set_host(&mut self, host: Option<H>) -> Option<H> {
        if self.in_choice_mode {
            self.exit_choice_mode();
        }
        core::mem::replace(&mut self.host, host)
    }

    pub fn into_host(self) -> Option<H> {
        self.host
    }

    pub fn options(&self) -> &ChoiceModeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ChoiceModeOptions) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ChoiceModeOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_listener(
        &mut self,
        listener: Option<impl ChoiceModeListener + Send + Sync + 'static>,
    ) {
        self.options.listener = listener.map(|l| Arc::new(l) as _);
    }

    /// The tracker, once choice mode has been entered at least once.
    pub fn choice_state(&self) -> Option<&ChoiceState> {
        self.state.as_ref()
    }

    pub fn is_in_choice_mode(&self) -> bool {
        self.in_choice_mode
    }

    /// Starts choice mode with nothing checked and registers the host observer.
    pub fn enter_choice_mode(&mut self) -> Result<(), ChoiceModeError> {
        if self.in_choice_mode {
            cwarn!("enter_choice_mode: already in choice mode");
            return Err(ChoiceModeError::AlreadyInChoiceMode);
        }
        let Some(host) = self.host.as_mut() else {
            cwarn!("enter_choice_mode: no host attached");
            return Err(ChoiceModeError::NoHost);
        };

        let capacity = self.options.initial_capacity;
        self.state
            .get_or_insert_with(|| ChoiceState::with_capacity(capacity))
            .clear();
        host.register_observer();
        self.in_choice_mode = true;
        cdebug!(item_count = host.item_count(), "enter_choice_mode");

        if let Some(listener) = &self.options.listener {
            listener.on_enter_choice_mode();
        }
        Ok(())
    }

    /// Ends choice mode: clears every check, unregisters the host observer and unchecks all
    /// on-screen views. Does nothing if choice mode is off.
    pub fn exit_choice_mode(&mut self) {
        if !self.in_choice_mode {
            return;
        }
        self.in_choice_mode = false;

        if let Some(state) = self.state.as_mut() {
            state.clear();
        }
        if let Some(host) = self.host.as_mut() {
            host.unregister_observer();
            host.refresh_on_screen_views(&|_| false);
        }
        cdebug!("exit_choice_mode");

        if let Some(listener) = &self.options.listener {
            listener.on_exit_choice_mode();
        }
    }

    /// Sets the checked state of the item at `position`.
    ///
    /// Setting the current value again is a no-op: no view update, no listener call.
    pub fn set_item_checked(
        &mut self,
        position: usize,
        checked: bool,
    ) -> Result<(), ChoiceModeError> {
        let (host, state, options) = self.parts_mut()?;
        let count = host.item_count();
        if position >= count {
            cwarn!(position, count, "set_item_checked: position out of range");
            return Err(ChoiceModeError::OutOfRange { position, count });
        }

        if !state.set_checked(position, checked) {
            return Ok(());
        }
        host.set_view_checked(position, checked);
        ctrace!(position, checked, "set_item_checked");

        if let Some(listener) = &options.listener {
            listener.on_item_checked_state_changed(position, host.item_id(position), checked);
        }
        Ok(())
    }

    pub fn toggle_item_checked(&mut self, position: usize) -> Result<(), ChoiceModeError> {
        let checked = self.is_item_checked(position)?;
        self.set_item_checked(position, !checked)
    }

    /// Checks every item, notifying the listener once per newly checked item.
    pub fn check_all(&mut self) -> Result<(), ChoiceModeError> {
        let (host, state, options) = self.parts_mut()?;
        for position in 0..host.item_count() {
            if !state.set_checked(position, true) {
                continue;
            }
            if let Some(listener) = &options.listener {
                listener.on_item_checked_state_changed(position, host.item_id(position), true);
            }
        }
        host.refresh_on_screen_views(&|p| state.is_checked(p));
        Ok(())
    }

    pub fn is_item_checked(&self, position: usize) -> Result<bool, ChoiceModeError> {
        Ok(self.active_state()?.is_checked(position))
    }

    pub fn checked_item_positions(&self) -> Result<Vec<usize>, ChoiceModeError> {
        Ok(self.active_state()?.checked_positions())
    }

    pub fn checked_item_count(&self) -> Result<usize, ChoiceModeError> {
        Ok(self.active_state()?.checked_count())
    }

    /// Syncs a freshly bound view with its checked state.
    ///
    /// Before choice mode is ever entered this does nothing; after leaving it, views are
    /// unchecked.
    pub fn on_view_attached(&mut self, position: usize) {
        if let (Some(host), Some(state)) = (self.host.as_mut(), self.state.as_ref()) {
            host.set_view_checked(position, state.is_checked(position));
        }
    }

    /// Applies an adapter mutation. Returns whether the checked set changed.
    ///
    /// Outside choice mode the observer is unregistered, so events are ignored.
    pub fn notify(&mut self, event: AdapterEvent) -> Result<bool, ChoiceModeError> {
        if !self.in_choice_mode {
            ctrace!(?event, "notify: ignored outside choice mode");
            return Ok(false);
        }
        let (host, state, options) = self.parts_mut()?;
        let changed = state.apply(event)?;
        if !changed {
            return Ok(false);
        }

        if options.refresh_views_on_change {
            host.refresh_on_screen_views(&|p| state.is_checked(p));
        }
        if let Some(listener) = &options.listener {
            listener.on_items_checked_state_changed();
        }
        Ok(true)
    }

    /// Captures the choice-mode flag and the checked positions.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            in_choice_mode: self.in_choice_mode,
            choice_state: self.state.clone(),
        }
    }

    /// Restores a previously saved state.
    ///
    /// If the saved state was in choice mode, choice mode is entered (unless already on) and
    /// every saved position is checked, notifying the listener per item. Saved positions must
    /// be valid for the current host; otherwise nothing changes.
    pub fn restore_state(&mut self, saved: SavedState) -> Result<(), ChoiceModeError> {
        if !saved.in_choice_mode {
            return Ok(());
        }
        let Some(host) = self.host.as_ref() else {
            return Err(ChoiceModeError::NoHost);
        };
        let count = host.item_count();
        let last = saved
            .choice_state
            .as_ref()
            .and_then(|s| s.positions().as_slice().last().copied());
        if let Some(position) = last.filter(|&p| p >= count) {
            cwarn!(position, count, "restore_state: saved position out of range");
            return Err(ChoiceModeError::OutOfRange { position, count });
        }

        if !self.in_choice_mode {
            self.enter_choice_mode()?;
        }
        let (host, state, options) = self.parts_mut()?;
        if let Some(saved_state) = &saved.choice_state {
            for position in saved_state.positions() {
                if !state.set_checked(position, true) {
                    continue;
                }
                if let Some(listener) = &options.listener {
                    listener.on_item_checked_state_changed(position, host.item_id(position), true);
                }
            }
        }
        host.refresh_on_screen_views(&|p| state.is_checked(p));
        cdebug!(checked = state.checked_count(), "restore_state");
        Ok(())
    }

    fn active_state(&self) -> Result<&ChoiceState, ChoiceModeError> {
        match self.state.as_ref() {
            Some(state) if self.in_choice_mode => Ok(state),
            _ => Err(ChoiceModeError::NotInChoiceMode),
        }
    }

    fn parts_mut(
        &mut self,
    ) -> Result<(&mut H, &mut ChoiceState, &ChoiceModeOptions), ChoiceModeError> {
        if !self.in_choice_mode {
            return Err(ChoiceModeError::NotInChoiceMode);
        }
        match (self.host.as_mut(), self.state.as_mut()) {
            (Some(host), Some(state)) => Ok((host, state, &self.options)),
            _ => Err(ChoiceModeError::NotInChoiceMode),
        }
    }
}
