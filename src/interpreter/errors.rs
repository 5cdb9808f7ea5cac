//! Runtime error types for the tape interpreter
//!
//! Only one error kind exists: a bracket with no partner, discovered the
//! first time a jump across it is attempted. It is fatal; once raised the
//! instruction pointer no longer means anything and the run must stop.
//!
//! Cell overflow is not an error (cells wrap), and unrecognised characters
//! cannot reach the engine because programs are filtered when loaded.

use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Jump resolution walked off the end of the program
    #[error("Unbalanced brackets: no partner for '{bracket}' at instruction {position}")]
    UnbalancedBrackets { position: usize, bracket: char },
}

impl EngineError {
    /// Index of the instruction that triggered the error
    pub fn position(&self) -> usize {
        match self {
            EngineError::UnbalancedBrackets { position, .. } => *position,
        }
    }
}
