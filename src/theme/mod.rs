mod parser;
mod sheet;
#[cfg(test)]
mod tests;

pub use ratatui::style::Color;
use ratatui::style::Modifier;

pub use sheet::{ComputedStyle, StyleQuery, Stylesheet};

pub const DEFAULT_PLACEHOLDER: &str = "Spune cum am putea imbunatati aplicatia (optional)";
pub const DEFAULT_ERROR_MESSAGE: &str = "Textul este prea lung";
pub const DEFAULT_COUNT_FORMAT: &str = "{count}/{max}";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
}

impl Font {
    pub fn modifiers(self) -> Modifier {
        let mut modifiers = Modifier::empty();
        if self.bold {
            modifiers |= Modifier::BOLD;
        }
        if self.italic {
            modifiers |= Modifier::ITALIC;
        }
        modifiers
    }
}

/// Border styling pushed to the surface whenever validity or theme changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSpec {
    pub color: Color,
    pub width: u16,
    pub rounded: bool,
}

/// Visual configuration of a themed text field.
///
/// Replaced as a whole; fields are public so hosts can build one with struct
/// update syntax from [`Theme::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub placeholder: String,
    pub placeholder_color: Color,
    pub text_color: Color,
    pub error_message: String,
    pub error_border_color: Color,
    pub border_color: Color,
    pub border_width: u16,
    pub corner_radius: u16,
    pub font: Font,
    /// `{count}` and `{max}` are substituted.
    pub count_format: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_color: Color::DarkGray,
            text_color: Color::White,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            error_border_color: Color::Red,
            border_color: Color::Gray,
            border_width: 1,
            corner_radius: 1,
            font: Font::default(),
            count_format: DEFAULT_COUNT_FORMAT.to_string(),
        }
    }
}

impl Theme {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn count_format(mut self, format: impl Into<String>) -> Self {
        self.count_format = format.into();
        self
    }

    /// Overlays the properties set in `style` on top of `self`.
    pub fn with_style(mut self, style: &ComputedStyle) -> Self {
        if let Some(text) = style.text("--placeholder") {
            self.placeholder = text.to_string();
        }
        if let Some(color) = style.color("--placeholder-color") {
            self.placeholder_color = color;
        }
        if let Some(color) = style.color("color") {
            self.text_color = color;
        }
        if let Some(text) = style.text("--error-message") {
            self.error_message = text.to_string();
        }
        if let Some(color) = style.color("--error-border-color") {
            self.error_border_color = color;
        }
        if let Some(color) = style.color("--border-color") {
            self.border_color = color;
        }
        if let Some(width) = style.u16("--border-width") {
            self.border_width = width;
        }
        if let Some(radius) = style.u16("--border-radius") {
            self.corner_radius = radius;
        }
        if let Some(weight) = style.text("font-weight") {
            self.font.bold = weight.eq_ignore_ascii_case("bold");
        }
        if let Some(font_style) = style.text("font-style") {
            self.font.italic = font_style.eq_ignore_ascii_case("italic");
        }
        if let Some(format) = style.text("--count-format") {
            self.count_format = format.to_string();
        }
        self
    }

    pub fn border(&self, valid: bool) -> BorderSpec {
        BorderSpec {
            color: if valid {
                self.border_color
            } else {
                self.error_border_color
            },
            width: self.border_width,
            rounded: self.corner_radius > 0,
        }
    }

    pub fn count_caption(&self, count: usize, max: usize) -> String {
        self.count_format
            .replace("{count}", &count.to_string())
            .replace("{max}", &max.to_string())
    }
}
