//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over an [`EngineView`] taken
//! once per frame, so a frame never mixes state from before and after a tick.
//!
//! - [`program`]: the filtered program with the current instruction highlighted
//! - [`tape`]: the materialized cells around the pointer
//! - [`output`]: characters written by `.`
//! - [`status`]: run state, step clock and keybindings
//!
//! [`EngineView`]: crate::snapshot::EngineView

pub mod output;
pub mod program;
pub mod status;
pub mod tape;

pub use output::render_output_pane;
pub use program::render_program_pane;
pub use status::render_status_bar;
pub use tape::render_tape_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

fn border_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
