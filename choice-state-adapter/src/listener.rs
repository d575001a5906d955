use crate::ItemId;

/// Callbacks fired by [`crate::ChoiceController`]. Every method defaults to a no-op.
pub trait ChoiceModeListener {
    fn on_enter_choice_mode(&self) {}

    fn on_exit_choice_mode(&self) {}

    /// A single item was checked or unchecked by a caller (not by a list mutation).
    fn on_item_checked_state_changed(&self, position: usize, id: ItemId, checked: bool) {
        let _ = (position, id, checked);
    }

    /// A list mutation changed the checked set.
    ///
    /// Not every mutation triggers this; only the ones that dropped or moved a check.
    fn on_items_checked_state_changed(&self) {}
}
