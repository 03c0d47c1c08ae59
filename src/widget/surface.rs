use crate::field::TextEdit;
use crate::theme::{BorderSpec, Color, Font};

/// The text-editing surface a [`ThemedTextField`](super::ThemedTextField)
/// drives. Implementations own what is on screen; the field only tells them
/// what to show.
pub trait TextSurface {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
    fn set_text_color(&mut self, color: Color);
    fn caret(&self) -> usize;
    fn set_caret(&mut self, caret: usize);
    /// Commits an edit the field allowed through unchanged.
    fn commit_edit(&mut self, edit: &TextEdit);
    fn set_border(&mut self, border: BorderSpec);
    fn set_font(&mut self, font: Font);
    fn set_error_caption(&mut self, message: &str, visible: bool);
    fn set_count_caption(&mut self, caption: &str, visible: bool);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caption {
    pub text: String,
    pub visible: bool,
}

/// In-memory surface; the renderer draws straight from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferSurface {
    text: String,
    text_color: Color,
    caret: usize,
    border: BorderSpec,
    font: Font,
    error: Caption,
    count: Caption,
}

impl Default for BufferSurface {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: Color::Reset,
            caret: 0,
            border: BorderSpec {
                color: Color::Reset,
                width: 1,
                rounded: false,
            },
            font: Font::default(),
            error: Caption::default(),
            count: Caption::default(),
        }
    }
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn border(&self) -> BorderSpec {
        self.border
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn error_caption(&self) -> &Caption {
        &self.error
    }

    pub fn count_caption(&self) -> &Caption {
        &self.count
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl TextSurface for BufferSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(self.char_len());
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.char_len());
    }

    fn commit_edit(&mut self, edit: &TextEdit) {
        let caret = edit.caret_after(self.char_len());
        self.text = edit.apply_to(&self.text);
        self.caret = caret.min(self.char_len());
    }

    fn set_border(&mut self, border: BorderSpec) {
        self.border = border;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_error_caption(&mut self, message: &str, visible: bool) {
        self.error = Caption {
            text: message.to_string(),
            visible,
        };
    }

    fn set_count_caption(&mut self, caption: &str, visible: bool) {
        self.count = Caption {
            text: caption.to_string(),
            visible,
        };
    }
}
