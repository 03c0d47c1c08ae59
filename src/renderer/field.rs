use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::interactions::{FieldHitboxes, Hitbox};
use crate::theme::BorderSpec;
use crate::widget::{BufferSurface, TextSurface};

/// Everything needed to draw one field for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FieldView<'a> {
    pub id: &'a str,
    pub surface: &'a BufferSurface,
    pub focused: bool,
    pub caret_visible: bool,
}

/// Draws the bordered text region with the caption row underneath it.
pub fn render_field(frame: &mut Frame<'_>, area: Rect, view: FieldView<'_>) {
    if area.width < 3 || area.height < 2 {
        return;
    }
    let surface = view.surface;
    let box_area = Rect {
        height: area.height - 1,
        ..area
    };
    let caption_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    let block = field_block(surface.border(), view.focused);
    let inner = block.inner(box_area);
    let text = surface.text();
    let (caret_col, caret_row) = caret_position(text, surface.caret(), inner.width);
    let scroll = caret_row.saturating_sub(inner.height.saturating_sub(1));

    let lines: Vec<Line> = wrap_lines(text, inner.width)
        .into_iter()
        .map(Line::from)
        .collect();
    let text_style = Style::default()
        .fg(surface.text_color())
        .add_modifier(surface.font().modifiers());
    frame.render_widget(
        Paragraph::new(lines)
            .style(text_style)
            .block(block)
            .scroll((scroll, 0)),
        box_area,
    );
    FieldHitboxes::record(
        view.id,
        Hitbox {
            x: box_area.x,
            y: box_area.y,
            width: box_area.width,
            height: box_area.height,
        },
    );

    render_captions(frame, caption_area, surface);

    if view.focused && view.caret_visible && inner.width > 0 && inner.height > 0 {
        let x = inner.x + caret_col.min(inner.width - 1);
        let y = inner.y + caret_row - scroll;
        frame.set_cursor(x, y);
    }
}

fn field_block(border: BorderSpec, focused: bool) -> Block<'static> {
    if border.width == 0 {
        return Block::default().borders(Borders::NONE);
    }
    let border_type = if border.width >= 2 {
        BorderType::Thick
    } else if border.rounded {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };
    let mut style = Style::default().fg(border.color);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style)
}

fn render_captions(frame: &mut Frame<'_>, area: Rect, surface: &BufferSurface) {
    let count = surface.count_caption();
    let mut error_area = area;
    if count.visible && !count.text.is_empty() {
        let width = u16::try_from(UnicodeWidthStr::width(count.text.as_str()))
            .unwrap_or(u16::MAX)
            .min(area.width);
        let count_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(count.text.as_str())
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            count_area,
        );
        error_area.width = area.width.saturating_sub(width + 1);
    }
    let error = surface.error_caption();
    if error.visible && error_area.width > 0 {
        frame.render_widget(
            Paragraph::new(error.text.as_str()).style(Style::default().fg(surface.border().color)),
            error_area,
        );
    }
}

/// Breaks `text` at newlines and wherever the next char would overflow
/// `width` columns.
pub(crate) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in text.chars() {
        if ch == '\n' {
            lines.push(std::mem::take(&mut current));
            used = 0;
            continue;
        }
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width && used > 0 {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += ch_width;
    }
    lines.push(current);
    lines
}

/// Column and row of the caret within the wrapped text.
pub(crate) fn caret_position(text: &str, caret: usize, width: u16) -> (u16, u16) {
    let width = usize::from(width.max(1));
    let mut row = 0usize;
    let mut used = 0usize;
    for ch in text.chars().take(caret) {
        if ch == '\n' {
            row += 1;
            used = 0;
            continue;
        }
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width && used > 0 {
            row += 1;
            used = 0;
        }
        used += ch_width;
    }
    if used >= width {
        row += 1;
        used = 0;
    }
    (
        u16::try_from(used).unwrap_or(u16::MAX),
        u16::try_from(row).unwrap_or(u16::MAX),
    )
}
