pub mod events;
pub mod field;
mod interactions;
pub mod renderer;
pub mod runtime;
pub mod screen;
pub mod theme;
pub mod widget;

pub use events::{TerminalEvent, field_event, is_ctrl_c, left_click};
pub use field::{
    Action, EditDecision, Effect, FieldEvent, FieldState, Phase, Rules, TextEdit, Validator,
    Validity, transition,
};
pub use interactions::{FieldHitboxes, Hitbox};
pub use runtime::{App, AppConfig, Screen, ScreenControl};
pub use screen::{FeedbackScreen, FieldConfig};
pub use theme::{BorderSpec, Color, Font, Stylesheet, Theme};
pub use widget::{BufferSurface, TextSurface, ThemedTextField};
