//! Program pane: the filtered instruction string, wrapped to the pane width

use super::border_style;
use crate::parser::Instruction;
use crate::snapshot::EngineView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn instruction_style(instruction: Instruction) -> Style {
    let color = match instruction {
        Instruction::Right | Instruction::Left => DEFAULT_THEME.primary,
        Instruction::Output | Instruction::Input => DEFAULT_THEME.secondary,
        Instruction::LoopStart | Instruction::LoopEnd => DEFAULT_THEME.success,
        Instruction::Increment | Instruction::Decrement => DEFAULT_THEME.fg,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// First row to draw so that `current_row` stays visible
fn scroll_offset(current_row: Option<usize>, total_rows: usize, visible_rows: usize) -> usize {
    let max_offset = total_rows.saturating_sub(visible_rows);
    match current_row {
        Some(row) => row.saturating_sub(visible_rows / 2).min(max_offset),
        None => 0,
    }
}

/// Render the program pane
pub fn render_program_pane(frame: &mut Frame, area: Rect, view: &EngineView) {
    let block = Block::default()
        .title(format!(" Program ({} instructions) ", view.program.len()))
        .borders(Borders::ALL)
        .border_style(border_style(false));

    if view.program.is_empty() {
        let paragraph = Paragraph::new("(empty program)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(2).max(1) as usize;
    let visible_rows = area.height.saturating_sub(2).max(1) as usize;
    let current = view.highlighted_index();

    let rows: Vec<Line> = view
        .program
        .instructions()
        .chunks(width)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, &instruction)| {
                    let style = if current == Some(row * width + col) {
                        Style::default()
                            .bg(DEFAULT_THEME.error)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        instruction_style(instruction)
                    };
                    Span::styled(instruction.as_char().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let offset = scroll_offset(current.map(|ip| ip / width), rows.len(), visible_rows);
    let visible: Vec<Line> = rows.into_iter().skip(offset).take(visible_rows).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
