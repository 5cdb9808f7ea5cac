//! # Introduction
//!
//! tapetty runs programs in the eight-instruction tape language
//! (`> < + - . , [ ]`) on a clock that speeds up with every instruction, and
//! draws the program, the tape and the output live in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Program (filtered) → Engine ← ticks, keystrokes
//!                                  ↓
//!                              EngineView → TUI
//! ```
//!
//! 1. [`parser`] — drops every character outside the instruction alphabet.
//! 2. [`memory`] — the growable [`memory::Tape`] of signed 64-bit cells.
//! 3. [`interpreter`] — the [`interpreter::engine::Engine`]: step clock,
//!    dispatch, bracket jumps and input gating, plus the mutex-guarded
//!    [`interpreter::shared::SharedEngine`] handle.
//! 4. [`snapshot`] — per-frame [`snapshot::EngineView`] copies and the
//!    [`snapshot::OutputSink`] trait.
//! 5. [`driver`] and [`headless`] — the two ways of supplying ticks.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Timing
//!
//! An instruction is dispatched once `round(60 / speed)` ticks have
//! accumulated, and `speed` is multiplied by 1.05 after each dispatch.

pub mod cli;
pub mod driver;
pub mod headless;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod ui;
