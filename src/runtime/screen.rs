use ratatui::Frame;
use ratatui::layout::Rect;

use crate::events::TerminalEvent;
use crate::theme::Stylesheet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenControl {
    Continue,
    Quit,
}

/// What the runtime hosts: owns its widgets and draws them.
pub trait Screen: Send {
    fn handle_event(&mut self, event: &TerminalEvent) -> ScreenControl;

    /// Called when the watched stylesheet changes on disk.
    fn apply_stylesheet(&mut self, stylesheet: &Stylesheet);

    fn render(&self, frame: &mut Frame<'_>, area: Rect);
}
