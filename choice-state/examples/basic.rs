// Example: checks follow their items across list mutations.
use choice_state::{AdapterEvent, ChoiceState};

fn main() {
    let mut state = ChoiceState::new();
    for position in [2, 5, 7] {
        state.set_checked(position, true);
    }
    println!("checked={:?}", state.checked_positions());

    // Two rows inserted above row 5: rows 5 and 7 are now at 7 and 9.
    let changed = state.on_item_range_inserted(3, 2);
    println!("after insert: changed={changed} checked={:?}", state.checked_positions());

    // Rows 6..9 removed: row 7 loses its check, row 9 slides up to 6.
    let changed = state.on_item_range_removed(6, 3);
    println!("after remove: changed={changed} checked={:?}", state.checked_positions());

    // Host notifications can also be forwarded as events.
    let changed = state.apply(AdapterEvent::item_moved(2, 0)).unwrap_or(false);
    println!("after move: changed={changed} checked={:?}", state.checked_positions());

    match state.apply(AdapterEvent::ItemRangeMoved {
        from: 0,
        to: 4,
        count: 2,
    }) {
        Ok(changed) => println!("multi move: changed={changed}"),
        Err(err) => println!("multi move rejected: {err}"),
    }
}
