//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is the engine's external collaborator: it owns the tick source,
//! forwards keystrokes as input, and redraws from a fresh
//! [`EngineView`](crate::snapshot::EngineView) every frame.
//!
//! - **[`app`]** — application state and keyboard event loop
//! - **[`panes`]** — stateless render functions for each pane
//! - **[`theme`]** — colour palette shared by all panes

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
