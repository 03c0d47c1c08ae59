use std::ops::Range;

use super::validator::Validity;

/// A proposed replacement of `range` (char indices) by `replacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, fragment: impl Into<String>) -> Self {
        Self::new(at..at, fragment)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, String::new())
    }

    /// Applies the edit to `text`, clamping the range to its char length.
    pub fn apply_to(&self, text: &str) -> String {
        let len = text.chars().count();
        let start = self.range.start.min(len);
        let end = self.range.end.clamp(start, len);
        let mut out = String::with_capacity(text.len() + self.replacement.len());
        out.extend(text.chars().take(start));
        out.push_str(&self.replacement);
        out.extend(text.chars().skip(end));
        out
    }

    pub(crate) fn caret_after(&self, text_len: usize) -> usize {
        self.range.start.min(text_len) + self.replacement.chars().count()
    }
}

/// Everything the platform surface reports to a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    FocusGained,
    FocusLost,
    SelectionChanged { caret: usize },
    Edit(TextEdit),
}

/// Whether the surface should commit a proposed edit itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditDecision {
    Apply,
    Suppress,
}

/// A single instruction for the surface hosting the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SetValidity(Validity),
    ShowPlaceholder,
    ShowText(String),
    MoveCaret(usize),
    SetCount(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub effects: Vec<Effect>,
    pub decision: EditDecision,
}

impl Action {
    pub(crate) fn none() -> Self {
        Self {
            effects: Vec::new(),
            decision: EditDecision::Apply,
        }
    }

    pub(crate) fn new(effects: Vec<Effect>, decision: EditDecision) -> Self {
        Self { effects, decision }
    }
}
