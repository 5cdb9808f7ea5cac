//! Status bar rendering with run state, step clock and keybindings

use crate::snapshot::EngineView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Badge text and colour for the current run state
fn state_badge(view: &EngineView) -> (&'static str, Color) {
    if view.fault.is_some() {
        (" FAULT ", DEFAULT_THEME.error)
    } else if view.halted {
        (" HALTED ", DEFAULT_THEME.success)
    } else if view.blocked_on_input {
        (" ⌨ INPUT ", DEFAULT_THEME.secondary)
    } else {
        (" ▶ RUNNING ", DEFAULT_THEME.primary)
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, view: &EngineView) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_color) = state_badge(view);
    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!(" {} ", message),
            bar_style.fg(if view.fault.is_some() {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let right_spans = vec![
        Span::styled(
            format!(
                " step {} │ x{:.2} │ {}/{} ticks ",
                view.dispatched, view.speed_multiplier, view.step_accumulator, view.tick_threshold
            ),
            desc_style,
        ),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^R ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" Esc ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}
