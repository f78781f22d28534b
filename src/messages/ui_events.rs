//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Re-run the fetch after a failure
    Retry,
    /// Quit the application
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context.
///
/// The retry control only exists in the failed view, so `r`/`Enter` map to
/// nothing unless `can_retry` is set.
pub fn key_to_ui_event(key: KeyEvent, can_retry: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('r') | KeyCode::Enter if can_retry => Some(UiEvent::Retry),
        _ => None,
    }
}
