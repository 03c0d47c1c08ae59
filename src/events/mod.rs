use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

mod keymap;

pub use keymap::field_event;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

pub fn map_terminal_event(event: CrosstermEvent) -> Option<TerminalEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Release => None,
        CrosstermEvent::Key(key) => Some(TerminalEvent::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(TerminalEvent::Mouse(mouse)),
        CrosstermEvent::Paste(text) => Some(TerminalEvent::Paste(text)),
        CrosstermEvent::Resize(cols, rows) => Some(TerminalEvent::Resize(cols, rows)),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
    }
}

pub fn is_ctrl_c(event: &TerminalEvent) -> bool {
    match event {
        TerminalEvent::Key(key) => {
            matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                && key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

pub fn is_key(event: &TerminalEvent, code: KeyCode) -> bool {
    matches!(event, TerminalEvent::Key(key) if key.code == code)
}

/// Position of a left-button press, if `event` is one.
pub fn left_click(event: &TerminalEvent) -> Option<(u16, u16)> {
    match event {
        TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some((*column, *row)),
        _ => None,
    }
}

pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);
