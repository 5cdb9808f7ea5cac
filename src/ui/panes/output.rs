//! Output pane rendering

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Last `height` lines of `output`, with control characters other than
/// newline shown as their Unicode control pictures
fn tail_lines(output: &str, height: usize) -> Vec<String> {
    let lines: Vec<String> = output
        .split('\n')
        .map(|line| {
            line.chars()
                .map(|c| match c {
                    '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + c as u32).unwrap_or('?'),
                    '\u{7f}' => '␡',
                    _ => c,
                })
                .collect()
        })
        .collect();
    let skip = lines.len().saturating_sub(height);
    lines.into_iter().skip(skip).collect()
}

/// Render the output pane, always scrolled to the bottom
pub fn render_output_pane(frame: &mut Frame, area: Rect, output: &str) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let text = tail_lines(output, visible_height).join("\n");
    let paragraph = Paragraph::new(text)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_last_lines() {
        assert_eq!(tail_lines("a\nb\nc", 2), vec!["b", "c"]);
        assert_eq!(tail_lines("ab", 3), vec!["ab"]);
    }

    #[test]
    fn test_control_characters_are_visible() {
        assert_eq!(tail_lines("a\u{0}\tb", 1), vec!["a␀␉b"]);
    }
}
