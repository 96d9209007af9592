//! Translation of terminal input into combobox events.

use combobox::Event;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the demo loop should do with one terminal event.
#[derive(Debug, PartialEq)]
pub enum Action<T> {
    Widget(Event<T>),
    /// Tab: blur the field if focused, focus it otherwise.
    ToggleFocus,
    /// Ctrl+O: open the dropdown if closed, close it otherwise.
    ToggleOpen,
    /// Left click on a terminal row.
    ClickRow(u16),
    Quit,
}

/// Convert a key press, given the current field text.
///
/// Typing produces the full new text, since the combobox receives the field
/// value rather than single characters.
pub fn convert_key_event<T>(event: KeyEvent, text: &str) -> Option<Action<T>> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('q' | 'c') => Some(Action::Quit),
            KeyCode::Char('o') => Some(Action::ToggleOpen),
            KeyCode::Char('l') => Some(Action::Widget(Event::Clear)),
            _ => None,
        };
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let event = match event.code {
        KeyCode::Char(c) => {
            let mut next = text.to_string();
            next.push(c);
            Event::Type(next)
        }
        KeyCode::Backspace => {
            let mut next = text.to_string();
            next.pop()?;
            Event::Type(next)
        }
        KeyCode::Up => Event::ArrowUp,
        KeyCode::Down => Event::ArrowDown,
        KeyCode::Enter => Event::Enter,
        KeyCode::Esc => Event::Escape,
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::ToggleFocus),
        _ => return None,
    };
    Some(Action::Widget(event))
}

/// Convert a mouse event. Only primary clicks matter.
pub fn convert_mouse_event<T>(event: MouseEvent) -> Option<Action<T>> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ClickRow(event.row)),
        _ => None,
    }
}
