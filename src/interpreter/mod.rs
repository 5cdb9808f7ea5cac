//! Tape interpreter execution engine
//!
//! - [`engine`]: the step clock, instruction dispatch and input gating
//! - [`jumps`]: bracket matching for `[` and `]`
//! - [`errors`]: runtime error types
//! - [`shared`]: the mutex-guarded handle used by the tick and keystroke sources
//!
//! # Execution Model
//!
//! Nothing runs on its own. An external clock calls [`engine::Engine::tick`]
//! at a fixed rate; once enough ticks have accumulated, exactly one
//! instruction is dispatched and the engine speeds up by a constant factor.
//! A `,` instruction pauses dispatch until a keystroke arrives through
//! [`engine::Engine::deliver_input`].

pub mod constants;
pub mod engine;
pub mod errors;
pub mod jumps;
pub mod shared;
