//! Memory model for the tape interpreter
//!
//! - [`tape`]: the growable, pointer-addressed array of integer cells
//!
//! # Growth
//!
//! The tape is logically infinite in both directions but only the cells the
//! pointer has visited are materialized. A single `Vec` backs it:
//!
//! ```text
//! move right past the end   →  push a zero cell
//! move left past the start  →  insert a zero cell at index 0, pointer stays 0
//! ```
//!
//! The left-hand case shifts every existing index by one; callers that
//! remember raw indices across a left move must account for the rebase.

pub mod tape;

pub use tape::Tape;
