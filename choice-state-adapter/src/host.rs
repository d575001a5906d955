/// A stable identifier for an item, as reported by the host adapter.
pub type ItemId = u64;

/// The list widget + adapter pair a [`crate::ChoiceController`] drives.
///
/// Implement this for your UI toolkit binding. The controller never sees toolkit types; it only
/// asks for the item count and ids, and tells the host which on-screen views to (un)check.
pub trait ChoiceHost {
    /// Number of items currently in the adapter.
    fn item_count(&self) -> usize;

    /// Identity of the item at `position`, passed to listeners. Defaults to the position itself.
    fn item_id(&self, position: usize) -> ItemId {
        position as ItemId
    }

    /// Updates the checked visual of the view bound to `position`, if one is on screen.
    fn set_view_checked(&mut self, position: usize, checked: bool);

    /// Updates every on-screen view; `is_checked` maps an adapter position to its state.
    ///
    /// Views without a valid adapter position should be skipped.
    fn refresh_on_screen_views(&mut self, is_checked: &dyn Fn(usize) -> bool);

    /// Called when choice mode starts listening to adapter mutations.
    ///
    /// From now until [`ChoiceHost::unregister_observer`], the host must forward every mutation
    /// to [`crate::ChoiceController::notify`], in order.
    fn register_observer(&mut self) {}

    fn unregister_observer(&mut self) {}
}
