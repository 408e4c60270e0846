//! Key bindings for the interactive prompt.
//!
//! Maps crossterm events to field actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An action resulting from a terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// Offer a character to the mask.
    Insert(char),
    /// Bracketed paste.
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Empty the field.
    Clear,
    /// Validate and accept the value.
    Submit,
    /// Leave without a value.
    Cancel,
    /// No action (ignore the event).
    Ignore,
}

/// Resolve a terminal event to a FieldAction.
pub fn resolve_event(event: Event) -> FieldAction {
    match event {
        Event::Key(key) => resolve_key(key),
        Event::Paste(text) => FieldAction::Paste(text),
        _ => FieldAction::Ignore,
    }
}

/// Resolve a KeyEvent to a FieldAction.
pub fn resolve_key(key: KeyEvent) -> FieldAction {
    if key.kind == KeyEventKind::Release {
        return FieldAction::Ignore;
    }

    // Ctrl combinations
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => FieldAction::Cancel,
            KeyCode::Char('u') => FieldAction::Clear,
            KeyCode::Char('a') => FieldAction::Home,
            KeyCode::Char('e') => FieldAction::End,
            _ => FieldAction::Ignore,
        };
    }
    // Alt chords are never input.
    if key.modifiers.contains(KeyModifiers::ALT) {
        return FieldAction::Ignore;
    }

    match key.code {
        KeyCode::Left => FieldAction::Left,
        KeyCode::Right => FieldAction::Right,
        KeyCode::Home => FieldAction::Home,
        KeyCode::End => FieldAction::End,
        KeyCode::Backspace => FieldAction::Backspace,
        KeyCode::Delete => FieldAction::Delete,
        KeyCode::Enter | KeyCode::Tab => FieldAction::Submit,
        KeyCode::Esc => FieldAction::Cancel,

        // Printable characters
        KeyCode::Char(ch) => FieldAction::Insert(ch),

        _ => FieldAction::Ignore,
    }
}
