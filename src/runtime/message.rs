use std::sync::Arc;

use crate::events::TerminalEvent;
use crate::theme::Stylesheet;

#[derive(Clone, Debug)]
pub enum AppMessage {
    RequestRender,
    ExternalEvent(TerminalEvent),
    Shutdown,
    StylesheetUpdated(Arc<Stylesheet>),
}
