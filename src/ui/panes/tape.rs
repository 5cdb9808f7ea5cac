//! Tape pane: a strip of boxed cells with an arrow under the pointer
//!
//! Cell boxes shrink as the tape grows, between [`MIN_CELL_CHARS`] and
//! [`MAX_CELL_CHARS`] columns. When even the narrowest boxes do not fit, a
//! window of cells centred on the pointer is shown instead.

use super::border_style;
use crate::snapshot::EngineView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

pub const MIN_CELL_CHARS: usize = 5;
pub const MAX_CELL_CHARS: usize = 11;
const CELL_GAP_CHARS: usize = 1;

/// Box width in columns for a tape of the given layout width
fn cell_chars(inner_width: usize, occupied_width: f64) -> usize {
    let fit = inner_width as f64 / occupied_width.max(1.0);
    (fit.floor() as usize).clamp(MIN_CELL_CHARS, MAX_CELL_CHARS)
}

/// Cells to draw: at most `slots` of them, centred on `pointer` where possible
fn visible_window(len: usize, pointer: usize, slots: usize) -> Range<usize> {
    if len <= slots {
        return 0..len;
    }
    let start = pointer.saturating_sub(slots / 2).min(len - slots);
    start..start + slots
}

/// Fit `text` into `width` columns, centred; overlong text keeps its tail
fn centered(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > width {
        let tail: String = chars[chars.len() - width.saturating_sub(1)..].iter().collect();
        return format!("…{}", tail);
    }
    format!("{:^width$}", text, width = width)
}

fn glyph(value: i64) -> Option<char> {
    u8::try_from(value)
        .ok()
        .filter(|b| (32..=126).contains(b))
        .map(char::from)
}

/// Render the tape pane
pub fn render_tape_pane(frame: &mut Frame, area: Rect, view: &EngineView) {
    let title = format!(
        " Tape ({} cells, pointer at {}) ",
        view.cells.len(),
        view.pointer
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(view.blocked_on_input));

    let inner_width = area.width.saturating_sub(2) as usize;
    let width = cell_chars(inner_width, view.occupied_width);
    let slots = ((inner_width + CELL_GAP_CHARS) / (width + CELL_GAP_CHARS)).max(1);
    let window = visible_window(view.cells.len(), view.pointer, slots);

    let used = window.len() * (width + CELL_GAP_CHARS) - CELL_GAP_CHARS;
    let indent = " ".repeat(inner_width.saturating_sub(used) / 2);
    let gap = " ".repeat(CELL_GAP_CHARS);
    let text_width = width - 2;

    let frame_style = Style::default().fg(DEFAULT_THEME.border_normal);
    let pointer_style = Style::default()
        .fg(DEFAULT_THEME.error)
        .add_modifier(Modifier::BOLD);

    let mut top = vec![Span::raw(indent.clone())];
    let mut values = vec![Span::raw(indent.clone())];
    let mut glyphs = vec![Span::raw(indent.clone())];
    let mut bottom = vec![Span::raw(indent.clone())];
    let mut arrow = vec![Span::raw(indent)];

    for index in window {
        let value = view.cells[index];
        let is_current = index == view.pointer;
        let edge = if is_current { pointer_style } else { frame_style };

        top.push(Span::styled(format!("┌{}┐", "─".repeat(text_width)), edge));
        values.push(Span::styled("│", edge));
        values.push(Span::styled(
            centered(&value.to_string(), text_width),
            Style::default().fg(DEFAULT_THEME.number),
        ));
        values.push(Span::styled("│", edge));
        glyphs.push(Span::styled("│", edge));
        glyphs.push(Span::styled(
            centered(&glyph(value).map(|c| format!("'{}'", c)).unwrap_or_default(), text_width),
            Style::default().fg(DEFAULT_THEME.glyph),
        ));
        glyphs.push(Span::styled("│", edge));
        bottom.push(Span::styled(format!("└{}┘", "─".repeat(text_width)), edge));
        arrow.push(Span::styled(
            centered(if is_current { "▲" } else { "" }, width),
            pointer_style,
        ));

        for row in [&mut top, &mut values, &mut glyphs, &mut bottom, &mut arrow] {
            row.push(Span::raw(gap.clone()));
        }
    }

    let lines = vec![
        Line::from(top),
        Line::from(values),
        Line::from(glyphs),
        Line::from(bottom),
        Line::from(arrow),
    ];

    // Vertically centre the strip
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut padded = vec![Line::default(); inner_height.saturating_sub(lines.len()) / 2];
    padded.extend(lines);

    frame.render_widget(Paragraph::new(padded).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_shrinks_with_tape() {
        assert_eq!(cell_chars(80, 1.0), MAX_CELL_CHARS);
        assert_eq!(cell_chars(80, 10.0), 8);
        assert_eq!(cell_chars(80, 100.0), MIN_CELL_CHARS);
    }

    #[test]
    fn test_window_centres_on_pointer() {
        assert_eq!(visible_window(3, 1, 5), 0..3);
        assert_eq!(visible_window(20, 10, 5), 8..13);
        assert_eq!(visible_window(20, 0, 5), 0..5);
        assert_eq!(visible_window(20, 19, 5), 15..20);
    }

    #[test]
    fn test_centered_text() {
        assert_eq!(centered("7", 5), "  7  ");
        assert_eq!(centered("123456", 4), "…456");
    }

    #[test]
    fn test_only_printable_ascii_has_glyph() {
        assert_eq!(glyph(65), Some('A'));
        assert_eq!(glyph(10), None);
        assert_eq!(glyph(127), None);
        assert_eq!(glyph(-65), None);
    }
}
