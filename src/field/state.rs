use super::validator::Validity;

/// Whether the field shows its placeholder or real user text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Editing,
}

/// Logical state of a field, independent of how it is drawn.
///
/// `text` only ever holds what the user typed: while the phase is
/// [`Phase::Empty`] it is blank and the placeholder lives on the surface.
/// `caret` is a char index into `text`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub phase: Phase,
    pub text: String,
    pub caret: usize,
    pub validity: Validity,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.phase == Phase::Empty
    }

    pub fn count(&self) -> usize {
        self.text.chars().count()
    }
}
