use choice_state::AdapterEvent;
use choice_state_adapter::{ChoiceController, ChoiceHost, ChoiceModeListener, ChoiceModeOptions};

// Example: a list host that owns its rows and renders a fixed window of them.
struct Rows {
    ids: Vec<u64>,
    window: std::ops::Range<usize>,
}

impl ChoiceHost for Rows {
    fn item_count(&self) -> usize {
        self.ids.len()
    }

    fn item_id(&self, position: usize) -> u64 {
        self.ids[position]
    }

    fn set_view_checked(&mut self, position: usize, checked: bool) {
        if self.window.contains(&position) {
            println!("  row {position} -> {}", if checked { "[x]" } else { "[ ]" });
        }
    }

    fn refresh_on_screen_views(&mut self, is_checked: &dyn Fn(usize) -> bool) {
        let end = self.window.end.min(self.ids.len());
        let rows: String = (self.window.start..end)
            .map(|p| if is_checked(p) { 'x' } else { '.' })
            .collect();
        println!("  refresh {rows}");
    }
}

struct Log;

impl ChoiceModeListener for Log {
    fn on_enter_choice_mode(&self) {
        println!("enter");
    }

    fn on_exit_choice_mode(&self) {
        println!("exit");
    }

    fn on_item_checked_state_changed(&self, position: usize, id: u64, checked: bool) {
        println!("item position={position} id={id} checked={checked}");
    }

    fn on_items_checked_state_changed(&self) {
        println!("items changed");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows = Rows {
        ids: (0..20).collect(),
        window: 0..8,
    };
    let options = ChoiceModeOptions::new().with_listener(Some(Log));
    let mut c = ChoiceController::with_host(rows, options);

    c.enter_choice_mode()?;
    c.set_item_checked(2, true)?;
    c.toggle_item_checked(5)?;

    // The host inserts a row at the top and forwards the mutation.
    if let Some(rows) = c.host_mut() {
        rows.ids.insert(0, 100);
    }
    c.notify(AdapterEvent::ItemRangeInserted { start: 0, count: 1 })?;
    println!("checked={:?}", c.checked_item_positions()?);

    let saved = c.save_state();
    c.exit_choice_mode();

    c.restore_state(saved)?;
    println!("restored={:?}", c.checked_item_positions()?);
    Ok(())
}
