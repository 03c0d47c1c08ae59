use crossterm::event::{KeyCode, KeyModifiers};

use crate::field::{FieldEvent, TextEdit};

use super::TerminalEvent;

/// Translates a terminal event into what a text-editing surface showing
/// `text` with the caret at `caret` would report to its field.
pub fn field_event(event: &TerminalEvent, text: &str, caret: usize) -> Option<FieldEvent> {
    let len = text.chars().count();
    let caret = caret.min(len);
    let key = match event {
        TerminalEvent::Paste(pasted) => {
            let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
            return (!normalized.is_empty())
                .then(|| FieldEvent::Edit(TextEdit::insert(caret, normalized)));
        }
        TerminalEvent::Key(key) => key,
        _ => return None,
    };
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let edit = |edit: TextEdit| Some(FieldEvent::Edit(edit));
    let select = |caret: usize| Some(FieldEvent::SelectionChanged { caret });
    match key.code {
        KeyCode::Char(ch) => edit(TextEdit::insert(caret, ch.to_string())),
        KeyCode::Enter => edit(TextEdit::insert(caret, "\n")),
        KeyCode::Backspace if caret > 0 => edit(TextEdit::delete(caret - 1..caret)),
        KeyCode::Delete if caret < len => edit(TextEdit::delete(caret..caret + 1)),
        KeyCode::Left if caret > 0 => select(caret - 1),
        KeyCode::Right if caret < len => select(caret + 1),
        KeyCode::Home => select(line_start(text, caret)),
        KeyCode::End => select(line_end(text, caret)),
        KeyCode::Up => vertical(text, caret, -1).and_then(select),
        KeyCode::Down => vertical(text, caret, 1).and_then(select),
        _ => None,
    }
}

fn line_start(text: &str, caret: usize) -> usize {
    text.chars()
        .take(caret)
        .collect::<Vec<_>>()
        .iter()
        .rposition(|ch| *ch == '\n')
        .map(|index| index + 1)
        .unwrap_or(0)
}

fn line_end(text: &str, caret: usize) -> usize {
    text.chars()
        .skip(caret)
        .position(|ch| ch == '\n')
        .map(|offset| caret + offset)
        .unwrap_or_else(|| text.chars().count())
}

/// Caret on the neighbouring line at the same column, clamped to its length.
fn vertical(text: &str, caret: usize, direction: i8) -> Option<usize> {
    let start = line_start(text, caret);
    let column = caret - start;
    let target_start = if direction < 0 {
        if start == 0 {
            return None;
        }
        line_start(text, start - 1)
    } else {
        let end = line_end(text, caret);
        if end >= text.chars().count() {
            return None;
        }
        end + 1
    };
    let target_end = line_end(text, target_start);
    Some((target_start + column).min(target_end))
}
