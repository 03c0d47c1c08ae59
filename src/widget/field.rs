use std::fmt;

use tracing::{debug, trace};

use crate::field::{
    EditDecision, Effect, FieldEvent, FieldState, Phase, Rules, Validator, Validity, transition,
};
use crate::theme::Theme;

use super::surface::TextSurface;

pub const DEFAULT_MAX_CHARACTERS: usize = 300;

/// Bordered multi-line text field with placeholder, error caption and
/// character counter.
pub struct ThemedTextField<S: TextSurface> {
    theme: Theme,
    surface: S,
    state: FieldState,
    max_characters: usize,
    count_hidden: bool,
    visible: bool,
    validator: Option<Validator>,
}

impl<S: TextSurface> ThemedTextField<S> {
    pub fn new(theme: Theme, surface: S) -> Self {
        let mut field = Self {
            theme,
            surface,
            state: FieldState::new(),
            max_characters: DEFAULT_MAX_CHARACTERS,
            count_hidden: false,
            visible: true,
            validator: None,
        };
        field.apply_theme();
        field.show_placeholder();
        field.surface.set_caret(0);
        field.refresh_count();
        field
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme and re-applies every styling it controls.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!("applying theme");
        self.theme = theme;
        self.apply_theme();
        if self.state.phase == Phase::Empty {
            self.show_placeholder();
        } else {
            self.surface.set_text_color(self.theme.text_color);
        }
        self.refresh_count();
    }

    pub fn max_characters(&self) -> usize {
        self.max_characters
    }

    pub fn set_max_characters(&mut self, max: usize) {
        self.max_characters = max;
        self.refresh_count();
    }

    pub fn is_character_count_hidden(&self) -> bool {
        self.count_hidden
    }

    pub fn set_character_count_hidden(&mut self, hidden: bool) {
        self.count_hidden = hidden;
        self.refresh_count();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Installs a validator and re-checks the current text against it.
    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
        self.revalidate();
    }

    /// Re-runs the validator over the real text. A pristine empty field stays
    /// valid until it is edited.
    pub fn revalidate(&mut self) {
        if self.state.phase == Phase::Empty && self.state.validity.is_valid() {
            return;
        }
        let validity = self
            .validator
            .as_ref()
            .map_or(Validity::Valid, |validator| validator.validate(&self.state.text));
        if validity != self.state.validity {
            debug!(
                from = ?self.state.validity,
                to = ?validity,
                "validity changed on recheck"
            );
        }
        self.state.validity = validity;
        self.apply_effect(Effect::SetValidity(validity));
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// What the user typed; blank while the placeholder is showing.
    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn count(&self) -> usize {
        self.state.count()
    }

    pub fn validity(&self) -> Validity {
        self.state.validity
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs one surface event through the change handler. Edits the handler
    /// lets through are committed to the surface before returning.
    pub fn handle(&mut self, event: FieldEvent) -> EditDecision {
        let edit = match &event {
            FieldEvent::Edit(edit) => Some(edit.clone()),
            _ => None,
        };
        let rules = Rules::new(self.validator.as_ref()).visible(self.visible);
        let (next, action) = transition(&self.state, event, &rules);
        if next.phase != self.state.phase {
            debug!(from = ?self.state.phase, to = ?next.phase, "field phase changed");
        }
        self.state = next;
        for effect in action.effects {
            self.apply_effect(effect);
        }
        if let (Some(edit), EditDecision::Apply) = (edit, action.decision) {
            trace!(range = ?edit.range, "committing edit");
            self.surface.commit_edit(&edit);
        }
        action.decision
    }

    fn apply_effect(&mut self, effect: Effect) {
        trace!(effect = ?effect, "applying field effect");
        match effect {
            Effect::SetValidity(validity) => {
                let valid = validity.is_valid();
                self.surface
                    .set_error_caption(&self.theme.error_message, !valid);
                self.surface.set_border(self.theme.border(valid));
            }
            Effect::ShowPlaceholder => self.show_placeholder(),
            Effect::ShowText(text) => {
                self.surface.set_text(&text);
                self.surface.set_text_color(self.theme.text_color);
            }
            Effect::MoveCaret(caret) => self.surface.set_caret(caret),
            Effect::SetCount(count) => self.set_count_caption(count),
        }
    }

    fn apply_theme(&mut self) {
        let valid = self.state.validity.is_valid();
        self.surface.set_border(self.theme.border(valid));
        self.surface.set_font(self.theme.font);
        self.surface
            .set_error_caption(&self.theme.error_message, !valid);
    }

    fn show_placeholder(&mut self) {
        self.surface.set_text(&self.theme.placeholder);
        self.surface.set_text_color(self.theme.placeholder_color);
    }

    fn refresh_count(&mut self) {
        self.set_count_caption(self.state.count());
    }

    fn set_count_caption(&mut self, count: usize) {
        let caption = self.theme.count_caption(count, self.max_characters);
        self.surface.set_count_caption(&caption, !self.count_hidden);
    }
}

impl<S: TextSurface + fmt::Debug> fmt::Debug for ThemedTextField<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedTextField")
            .field("state", &self.state)
            .field("max_characters", &self.max_characters)
            .field("count_hidden", &self.count_hidden)
            .field("surface", &self.surface)
            .finish()
    }
}
