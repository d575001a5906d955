use alloc::sync::Arc;

use crate::ChoiceModeListener;

/// A listener shared between option clones.
pub type SharedListener = Arc<dyn ChoiceModeListener + Send + Sync>;

const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Configuration for [`crate::ChoiceController`].
///
/// This type is designed to be cheap to clone: the listener is stored in an `Arc` so adapters can
/// update a few fields and call `ChoiceController::set_options` without rebuilding it.
#[derive(Clone)]
pub struct ChoiceModeOptions {
    /// Number of checked positions the tracker can hold before its first reallocation.
    pub initial_capacity: usize,

    /// Optional callbacks for choice-mode lifecycle and check changes.
    pub listener: Option<SharedListener>,

    /// Whether a list mutation that changed the checked set refreshes the on-screen views.
    ///
    /// Disable this if your host rebinds every view after a mutation anyway.
    pub refresh_views_on_change: bool,
}

impl Default for ChoiceModeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceModeOptions {
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            listener: None,
            refresh_views_on_change: true,
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_listener(
        mut self,
        listener: Option<impl ChoiceModeListener + Send + Sync + 'static>,
    ) -> Self {
        self.listener = listener.map(|l| Arc::new(l) as _);
        self
    }

    pub fn with_shared_listener(mut self, listener: Option<SharedListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn with_refresh_views_on_change(mut self, refresh_views_on_change: bool) -> Self {
        self.refresh_views_on_change = refresh_views_on_change;
        self
    }
}

impl core::fmt::Debug for ChoiceModeOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChoiceModeOptions")
            .field("initial_capacity", &self.initial_capacity)
            .field("has_listener", &self.listener.is_some())
            .field("refresh_views_on_change", &self.refresh_views_on_change)
            .finish()
    }
}
