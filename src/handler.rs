use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Handle a key event: run the input capture hook, then hand whatever it
/// returns to the tree view's default key handling.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if let Some(key) = capture_input(app, key) {
        handle_tree_key(app, key);
    }
}

/// Input capture hook. The cycle-sort key re-orders the tree; every key is
/// returned unmodified so default handling still runs.
pub fn capture_input(app: &mut App, key: KeyEvent) -> Option<KeyEvent> {
    if key.code == KeyCode::Char(app.cycle_sort_key)
        && !key.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.cycle_sort();
    }
    Some(key)
}

/// Default tree view handling: navigation, selection and quitting.
fn handle_tree_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select(),
        _ => {}
    }
}
