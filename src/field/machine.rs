use tracing::{debug, trace};

use super::event::{Action, EditDecision, Effect, FieldEvent, TextEdit};
use super::state::{FieldState, Phase};
use super::validator::{Validator, validate};

/// Inputs to a transition that are configuration rather than state.
#[derive(Clone, Copy, Debug)]
pub struct Rules<'a> {
    pub validator: Option<&'a Validator>,
    pub visible: bool,
}

impl<'a> Rules<'a> {
    pub fn new(validator: Option<&'a Validator>) -> Self {
        Self {
            validator,
            visible: true,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Default for Rules<'_> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Computes the next state of a field and the effects its surface must show.
pub fn transition(
    state: &FieldState,
    event: FieldEvent,
    rules: &Rules<'_>,
) -> (FieldState, Action) {
    trace!(phase = ?state.phase, event = ?event, "field transition");
    match event {
        FieldEvent::Edit(edit) => on_edit(state, edit, rules),
        FieldEvent::FocusGained => on_focus_gained(state),
        FieldEvent::FocusLost => on_focus_lost(state),
        FieldEvent::SelectionChanged { caret } => on_selection(state, caret, rules),
    }
}

fn on_edit(state: &FieldState, edit: TextEdit, rules: &Rules<'_>) -> (FieldState, Action) {
    let current = match state.phase {
        Phase::Empty => "",
        Phase::Editing => state.text.as_str(),
    };
    let proposed = edit.apply_to(current);
    let validity = validate(rules.validator, &proposed);
    let mut effects = vec![Effect::SetValidity(validity)];

    if proposed.is_empty() {
        debug!("edit cleared the field, showing placeholder");
        effects.extend([
            Effect::ShowPlaceholder,
            Effect::MoveCaret(0),
            Effect::SetCount(0),
        ]);
        let next = FieldState {
            phase: Phase::Empty,
            text: String::new(),
            caret: 0,
            validity,
        };
        return (next, Action::new(effects, EditDecision::Suppress));
    }

    if state.phase == Phase::Empty && !edit.replacement.is_empty() {
        let count = edit.replacement.chars().count();
        debug!(count, "first input replaces placeholder");
        effects.extend([
            Effect::ShowText(edit.replacement.clone()),
            Effect::MoveCaret(count),
            Effect::SetCount(count),
        ]);
        let next = FieldState {
            phase: Phase::Editing,
            text: edit.replacement,
            caret: count,
            validity,
        };
        return (next, Action::new(effects, EditDecision::Suppress));
    }

    let count = proposed.chars().count();
    let caret = edit.caret_after(current.chars().count()).min(count);
    effects.push(Effect::SetCount(count));
    let next = FieldState {
        phase: Phase::Editing,
        text: proposed,
        caret,
        validity,
    };
    (next, Action::new(effects, EditDecision::Apply))
}

fn on_focus_gained(state: &FieldState) -> (FieldState, Action) {
    if state.phase != Phase::Empty {
        return (state.clone(), Action::none());
    }
    debug!("focus gained on empty field, clearing placeholder");
    let next = FieldState {
        phase: Phase::Editing,
        text: String::new(),
        caret: 0,
        validity: state.validity,
    };
    let effects = vec![Effect::ShowText(String::new()), Effect::MoveCaret(0)];
    (next, Action::new(effects, EditDecision::Suppress))
}

fn on_focus_lost(state: &FieldState) -> (FieldState, Action) {
    if state.phase == Phase::Empty || !state.text.is_empty() {
        return (state.clone(), Action::none());
    }
    debug!("focus lost with blank text, restoring placeholder");
    let next = FieldState {
        phase: Phase::Empty,
        text: String::new(),
        caret: 0,
        validity: state.validity,
    };
    let effects = vec![Effect::ShowPlaceholder, Effect::MoveCaret(0)];
    (next, Action::new(effects, EditDecision::Suppress))
}

fn on_selection(state: &FieldState, caret: usize, rules: &Rules<'_>) -> (FieldState, Action) {
    let mut next = state.clone();
    if state.phase == Phase::Empty {
        if rules.visible && caret != 0 {
            next.caret = 0;
            let effects = vec![Effect::MoveCaret(0)];
            return (next, Action::new(effects, EditDecision::Suppress));
        }
        next.caret = 0;
        return (next, Action::none());
    }
    next.caret = caret.min(state.count());
    (next, Action::none())
}
