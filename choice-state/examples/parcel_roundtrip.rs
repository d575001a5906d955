// Example: save and restore checked positions through a flat i32 parcel.
use choice_state::{ChoiceState, Parcel};

fn main() {
    let mut state = ChoiceState::new();
    state.set_checked(1, true);
    state.set_checked(42, true);

    let mut parcel = Parcel::new();
    if let Err(err) = ChoiceState::write_to_parcel(Some(&state), &mut parcel) {
        println!("write failed: {err}");
        return;
    }
    if let Err(err) = ChoiceState::write_to_parcel(None, &mut parcel) {
        println!("write failed: {err}");
        return;
    }
    println!("parcel={:?}", parcel.as_slice());

    let mut parcel = Parcel::from_vec(parcel.into_vec());
    let restored = ChoiceState::read_from_parcel(&mut parcel);
    println!("restored={:?}", restored.map(|s| s.map(|s| s.checked_positions())));
    let absent = ChoiceState::read_from_parcel(&mut parcel);
    println!("absent={absent:?}");
}
