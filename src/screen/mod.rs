//! The feedback screen: a title, one themed field and a key hint.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use crate::events::{TerminalEvent, field_event, is_key, left_click};
use crate::field::{FieldEvent, Validator};
use crate::interactions::FieldHitboxes;
use crate::renderer::{FieldView, render_field};
use crate::runtime::{Screen, ScreenControl};
use crate::theme::{ComputedStyle, StyleQuery, Stylesheet, Theme};
use crate::widget::{BufferSurface, DEFAULT_MAX_CHARACTERS, TextSurface, ThemedTextField};

#[cfg(test)]
mod tests;

pub const FEEDBACK_FIELD_ID: &str = "feedback";
const DEFAULT_TITLE: &str = "Feedback";
const HINT: &str = "Tab: edit  Esc: done  Esc again: quit";

/// Non-theme settings of the hosted field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub max_characters: usize,
    pub count_hidden: bool,
    pub width: u16,
    pub height: u16,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_characters: DEFAULT_MAX_CHARACTERS,
            count_hidden: false,
            width: 60,
            height: 8,
        }
    }
}

impl FieldConfig {
    pub fn with_style(self, style: &ComputedStyle) -> Self {
        Self {
            max_characters: style.usize("--max-characters").unwrap_or(self.max_characters),
            count_hidden: style.bool("--count-hidden").unwrap_or(self.count_hidden),
            width: style.u16("width").unwrap_or(self.width),
            height: style.u16("height").unwrap_or(self.height),
        }
    }
}

pub struct FeedbackScreen {
    id: String,
    title: String,
    field: ThemedTextField<BufferSurface>,
    config: FieldConfig,
    focused: bool,
    caret_visible: bool,
}

impl FeedbackScreen {
    pub fn new(theme: Theme, config: FieldConfig) -> Self {
        let mut field = ThemedTextField::new(theme, BufferSurface::new());
        field.set_max_characters(config.max_characters);
        field.set_character_count_hidden(config.count_hidden);
        field.set_validator(Some(Validator::max_chars(config.max_characters)));
        Self {
            id: FEEDBACK_FIELD_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            field,
            config,
            focused: false,
            caret_visible: true,
        }
    }

    pub fn from_stylesheet(stylesheet: &Stylesheet) -> Self {
        let (theme, config, title) = resolve(stylesheet, FEEDBACK_FIELD_ID);
        let mut screen = Self::new(theme, config);
        if let Some(title) = title {
            screen.title = title;
        }
        screen
    }

    /// Field id used for styling and hit testing.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn field(&self) -> &ThemedTextField<BufferSurface> {
        &self.field
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    fn set_focus(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        debug!(field = %self.id, focused, "field focus changed");
        self.focused = focused;
        self.caret_visible = true;
        let event = if focused {
            FieldEvent::FocusGained
        } else {
            FieldEvent::FocusLost
        };
        self.field.handle(event);
    }

    fn apply_config(&mut self, config: FieldConfig) {
        self.config = config;
        self.field.set_max_characters(config.max_characters);
        self.field.set_character_count_hidden(config.count_hidden);
        self.field
            .set_validator(Some(Validator::max_chars(config.max_characters)));
    }

    fn field_area(&self, area: Rect) -> Rect {
        let top = area.y.saturating_add(2);
        let available = area.height.saturating_sub(3);
        let width = self.config.width.min(area.width);
        let height = self.config.height.min(available);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: top.min(area.y + area.height),
            width,
            height,
        }
    }
}

impl Screen for FeedbackScreen {
    fn handle_event(&mut self, event: &TerminalEvent) -> ScreenControl {
        if matches!(event, TerminalEvent::Tick) {
            if self.focused {
                self.caret_visible = !self.caret_visible;
            }
            return ScreenControl::Continue;
        }
        if let Some((column, row)) = left_click(event) {
            let inside = FieldHitboxes::contains(&self.id, column, row).unwrap_or(false);
            self.set_focus(inside);
            return ScreenControl::Continue;
        }
        if !self.focused {
            if is_key(event, KeyCode::Tab) || is_key(event, KeyCode::Enter) {
                self.set_focus(true);
            } else if is_key(event, KeyCode::Esc) {
                return ScreenControl::Quit;
            }
            return ScreenControl::Continue;
        }
        if is_key(event, KeyCode::Esc) || is_key(event, KeyCode::Tab) {
            self.set_focus(false);
            return ScreenControl::Continue;
        }
        let surface = self.field.surface();
        if let Some(field_event) = field_event(event, surface.text(), surface.caret()) {
            self.field.handle(field_event);
            self.caret_visible = true;
        }
        ScreenControl::Continue
    }

    fn apply_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let (theme, config, title) = resolve(stylesheet, &self.id);
        self.field.set_theme(theme);
        self.apply_config(config);
        if let Some(title) = title {
            self.title = title;
        }
        info!(field = %self.id, "theme applied from stylesheet");
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }
        frame.render_widget(
            Paragraph::new(self.title.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Rect { height: 1, ..area },
        );
        let field_area = self.field_area(area);
        render_field(
            frame,
            field_area,
            FieldView {
                id: &self.id,
                surface: self.field.surface(),
                focused: self.focused,
                caret_visible: self.caret_visible,
            },
        );
        let hint_y = field_area.y + field_area.height;
        if hint_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(HINT)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                Rect {
                    y: hint_y,
                    height: 1,
                    ..area
                },
            );
        }
    }
}

fn resolve(stylesheet: &Stylesheet, id: &str) -> (Theme, FieldConfig, Option<String>) {
    let style = stylesheet.query(StyleQuery::element("field").with_id(id));
    let theme = Theme::default().with_style(&style);
    let config = FieldConfig::default().with_style(&style);
    let title = stylesheet
        .query(StyleQuery::element("screen"))
        .text("--title")
        .map(str::to_string);
    (theme, config, title)
}
