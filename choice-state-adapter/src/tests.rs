use crate::*;

use choice_state::{AdapterEvent, ChoiceError, Parcel};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::vec;
use std::vec::Vec;

#[derive(Debug)]
struct MockHost {
    items: Vec<u64>,
    on_screen: core::ops::Range<usize>,
    views: HashMap<usize, bool>,
    observing: bool,
}

impl MockHost {
    fn new(count: usize, on_screen: core::ops::Range<usize>) -> Self {
        Self {
            items: (0..count as u64).map(|i| 100 + i).collect(),
            on_screen,
            views: HashMap::new(),
            observing: false,
        }
    }

    fn view(&self, position: usize) -> Option<bool> {
        self.views.get(&position).copied()
    }
}

impl ChoiceHost for MockHost {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_id(&self, position: usize) -> ItemId {
        self.items[position]
    }

    fn set_view_checked(&mut self, position: usize, checked: bool) {
        if self.on_screen.contains(&position) {
            self.views.insert(position, checked);
        }
    }

    fn refresh_on_screen_views(&mut self, is_checked: &dyn Fn(usize) -> bool) {
        for position in self.on_screen.clone() {
            if position < self.items.len() {
                self.views.insert(position, is_checked(position));
            }
        }
    }

    fn register_observer(&mut self) {
        self.observing = true;
    }

    fn unregister_observer(&mut self) {
        self.observing = false;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Enter,
    Exit,
    Item(usize, ItemId, bool),
    Items,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Call>>>);

impl Recorder {
    fn take(&self) -> Vec<Call> {
        core::mem::take(&mut *self.0.lock().unwrap())
    }

    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }
}

impl ChoiceModeListener for Recorder {
    fn on_enter_choice_mode(&self) {
        self.push(Call::Enter);
    }

    fn on_exit_choice_mode(&self) {
        self.push(Call::Exit);
    }

    fn on_item_checked_state_changed(&self, position: usize, id: ItemId, checked: bool) {
        self.push(Call::Item(position, id, checked));
    }

    fn on_items_checked_state_changed(&self) {
        self.push(Call::Items);
    }
}

fn controller(count: usize) -> (ChoiceController<MockHost>, Recorder) {
    let recorder = Recorder::default();
    let options = ChoiceModeOptions::new().with_listener(Some(recorder.clone()));
    let c = ChoiceController::with_host(MockHost::new(count, 0..5), options);
    (c, recorder)
}

fn host(c: &ChoiceController<MockHost>) -> &MockHost {
    c.host().unwrap()
}

#[test]
fn enter_requires_a_host() {
    let mut c = ChoiceController::<MockHost>::new(ChoiceModeOptions::new());
    assert_eq!(c.enter_choice_mode(), Err(ChoiceModeError::NoHost));
    assert!(!c.is_in_choice_mode());
}

#[test]
fn enter_registers_observer_and_rejects_reentry() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    assert!(c.is_in_choice_mode());
    assert!(host(&c).observing);
    assert_eq!(c.checked_item_count(), Ok(0));

    assert_eq!(
        c.enter_choice_mode(),
        Err(ChoiceModeError::AlreadyInChoiceMode)
    );
    assert_eq!(rec.take(), vec![Call::Enter]);
}

#[test]
fn choice_operations_require_choice_mode() {
    let (mut c, rec) = controller(10);
    let off = Err(ChoiceModeError::NotInChoiceMode);
    assert_eq!(c.set_item_checked(1, true), off);
    assert_eq!(c.toggle_item_checked(1), off);
    assert_eq!(c.check_all(), off);
    assert_eq!(c.is_item_checked(1), Err(ChoiceModeError::NotInChoiceMode));
    assert_eq!(
        c.checked_item_positions(),
        Err(ChoiceModeError::NotInChoiceMode)
    );
    assert_eq!(c.checked_item_count(), Err(ChoiceModeError::NotInChoiceMode));
    assert!(c.choice_state().is_none());
    assert!(rec.take().is_empty());
}

#[test]
fn set_item_checked_validates_range() {
    let (mut c, _rec) = controller(10);
    c.enter_choice_mode().unwrap();
    assert_eq!(
        c.set_item_checked(10, true),
        Err(ChoiceModeError::OutOfRange {
            position: 10,
            count: 10
        })
    );
    assert_eq!(c.checked_item_count(), Ok(0));
}

#[test]
fn set_item_checked_updates_view_and_listener_once() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    rec.take();

    c.set_item_checked(3, true).unwrap();
    c.set_item_checked(3, true).unwrap();
    // Off-screen positions are tracked but have no view.
    c.set_item_checked(7, true).unwrap();

    assert_eq!(c.checked_item_positions(), Ok(vec![3, 7]));
    assert_eq!(host(&c).view(3), Some(true));
    assert_eq!(host(&c).view(7), None);
    assert_eq!(
        rec.take(),
        vec![Call::Item(3, 103, true), Call::Item(7, 107, true)]
    );

    c.set_item_checked(3, false).unwrap();
    c.set_item_checked(3, false).unwrap();
    assert_eq!(host(&c).view(3), Some(false));
    assert_eq!(rec.take(), vec![Call::Item(3, 103, false)]);
}

#[test]
fn toggle_flips_checked_state() {
    let (mut c, _rec) = controller(4);
    c.enter_choice_mode().unwrap();
    c.toggle_item_checked(2).unwrap();
    assert_eq!(c.is_item_checked(2), Ok(true));
    c.toggle_item_checked(2).unwrap();
    assert_eq!(c.is_item_checked(2), Ok(false));
    assert_eq!(
        c.toggle_item_checked(4),
        Err(ChoiceModeError::OutOfRange {
            position: 4,
            count: 4
        })
    );
}

#[test]
fn check_all_skips_checked_items_and_refreshes_views() {
    let (mut c, rec) = controller(7);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(2, true).unwrap();
    rec.take();

    c.check_all().unwrap();
    assert_eq!(c.checked_item_positions(), Ok((0..7).collect::<Vec<_>>()));
    let expected: Vec<Call> = [0usize, 1, 3, 4, 5, 6]
        .into_iter()
        .map(|p| Call::Item(p, 100 + p as u64, true))
        .collect();
    assert_eq!(rec.take(), expected);
    for p in 0..5 {
        assert_eq!(host(&c).view(p), Some(true));
    }
}

#[test]
fn notify_follows_insertions_and_refreshes_views() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();
    c.set_item_checked(4, true).unwrap();
    rec.take();

    c.host_mut().unwrap().items.insert(0, 999);
    let changed = c
        .notify(AdapterEvent::ItemRangeInserted { start: 0, count: 1 })
        .unwrap();
    assert!(changed);
    assert_eq!(c.checked_item_positions(), Ok(vec![2, 5]));

    let views: Vec<Option<bool>> = (0..5).map(|p| host(&c).view(p)).collect();
    assert_eq!(
        views,
        vec![Some(false), Some(false), Some(true), Some(false), Some(false)]
    );
    assert_eq!(rec.take(), vec![Call::Items]);
}

#[test]
fn notify_without_change_is_silent() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();
    rec.take();

    c.host_mut().unwrap().items.push(5000);
    assert_eq!(
        c.notify(AdapterEvent::ItemRangeInserted {
            start: 10,
            count: 1
        }),
        Ok(false)
    );
    assert!(rec.take().is_empty());
}

#[test]
fn notify_outside_choice_mode_is_ignored() {
    let (mut c, rec) = controller(10);
    assert_eq!(c.notify(AdapterEvent::Changed), Ok(false));
    assert_eq!(
        c.notify(AdapterEvent::ItemRangeMoved {
            from: 0,
            to: 3,
            count: 2
        }),
        Ok(false)
    );
    assert!(rec.take().is_empty());
}

#[test]
fn notify_rejects_multi_item_moves() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();
    rec.take();

    assert_eq!(
        c.notify(AdapterEvent::ItemRangeMoved {
            from: 1,
            to: 4,
            count: 2
        }),
        Err(ChoiceModeError::Choice(ChoiceError::UnsupportedMove {
            item_count: 2
        }))
    );
    assert_eq!(c.checked_item_positions(), Ok(vec![1]));
    assert!(rec.take().is_empty());
}

#[test]
fn notify_can_skip_view_refresh() {
    let (mut c, rec) = controller(10);
    c.update_options(|o| o.refresh_views_on_change = false);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();

    assert_eq!(c.notify(AdapterEvent::Changed), Ok(true));
    assert_eq!(c.checked_item_count(), Ok(0));
    // The stale view is left for the host to rebind.
    assert_eq!(host(&c).view(1), Some(true));
    assert_eq!(rec.take().last(), Some(&Call::Items));
}

#[test]
fn exit_clears_checks_and_unchecks_views() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();
    c.set_item_checked(3, true).unwrap();
    rec.take();

    c.exit_choice_mode();
    assert!(!c.is_in_choice_mode());
    assert!(!host(&c).observing);
    assert_eq!(c.choice_state().map(|s| s.checked_count()), Some(0));
    for p in 0..5 {
        assert_eq!(host(&c).view(p), Some(false));
    }
    assert_eq!(rec.take(), vec![Call::Exit]);

    // Leaving twice is harmless.
    c.exit_choice_mode();
    assert!(rec.take().is_empty());

    // Re-entering starts from an empty selection.
    c.enter_choice_mode().unwrap();
    assert_eq!(c.checked_item_positions(), Ok(vec![]));
}

#[test]
fn on_view_attached_syncs_view_state() {
    let (mut c, _rec) = controller(10);
    c.on_view_attached(1);
    assert_eq!(host(&c).view(1), None);

    c.enter_choice_mode().unwrap();
    c.set_item_checked(1, true).unwrap();
    c.host_mut().unwrap().views.clear();
    c.on_view_attached(1);
    c.on_view_attached(2);
    assert_eq!(host(&c).view(1), Some(true));
    assert_eq!(host(&c).view(2), Some(false));
}

#[test]
fn set_host_leaves_choice_mode() {
    let (mut c, rec) = controller(10);
    c.enter_choice_mode().unwrap();
    rec.take();

    let previous = c.set_host(Some(MockHost::new(3, 0..3))).unwrap();
    assert!(!previous.observing);
    assert!(!c.is_in_choice_mode());
    assert_eq!(rec.take(), vec![Call::Exit]);
    assert_eq!(c.host().map(|h| h.item_count()), Some(3));
}

#[test]
fn saved_state_roundtrips_through_parcel_and_restores() {
    let (mut a, _rec_a) = controller(10);
    a.enter_choice_mode().unwrap();
    a.set_item_checked(1, true).unwrap();
    a.set_item_checked(3, true).unwrap();

    let mut parcel = Parcel::new();
    a.save_state().write_to_parcel(&mut parcel).unwrap();
    assert_eq!(parcel.as_slice(), &[1, 2, 1, 3]);

    let mut parcel = Parcel::from_vec(parcel.into_vec());
    let saved = SavedState::read_from_parcel(&mut parcel).unwrap();
    assert!(saved.in_choice_mode);

    let (mut b, rec_b) = controller(10);
    b.restore_state(saved).unwrap();
    assert!(b.is_in_choice_mode());
    assert_eq!(b.checked_item_positions(), Ok(vec![1, 3]));
    assert_eq!(
        rec_b.take(),
        vec![
            Call::Enter,
            Call::Item(1, 101, true),
            Call::Item(3, 103, true)
        ]
    );
    assert_eq!(host(&b).view(1), Some(true));
    assert_eq!(host(&b).view(2), Some(false));
    assert_eq!(host(&b).view(3), Some(true));
}

#[test]
fn saved_state_without_choice_mode() {
    let (c, _rec) = controller(10);
    let saved = c.save_state();
    assert_eq!(saved, SavedState::default());

    let mut parcel = Parcel::new();
    saved.write_to_parcel(&mut parcel).unwrap();
    assert_eq!(parcel.as_slice(), &[0, -1]);

    let (mut other, rec) = controller(10);
    other.restore_state(saved).unwrap();
    assert!(!other.is_in_choice_mode());
    assert!(rec.take().is_empty());
}

#[test]
fn restore_rejects_positions_beyond_item_count() {
    let (mut c, rec) = controller(2);
    let mut state = choice_state::ChoiceState::new();
    state.set_checked(0, true);
    state.set_checked(5, true);
    let saved = SavedState {
        in_choice_mode: true,
        choice_state: Some(state),
    };

    assert_eq!(
        c.restore_state(saved),
        Err(ChoiceModeError::OutOfRange {
            position: 5,
            count: 2
        })
    );
    assert!(!c.is_in_choice_mode());
    assert!(rec.take().is_empty());
}
