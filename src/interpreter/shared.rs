//! Cross-thread access to a single engine
//!
//! The tick source and the keystroke source run independently. Both go
//! through [`SharedEngine`], which holds the engine behind one mutex, so a
//! tick never observes the blocked flag while an input delivery is halfway
//! through writing the cell and clearing it, and vice versa. Nothing here
//! waits on input: a blocked engine simply skips dispatch on each tick.

use crate::interpreter::engine::{Engine, TickOutcome};
use crate::interpreter::errors::EngineError;
use crate::snapshot::EngineView;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to an engine shared between threads
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Engine state is plain data updated under the lock, so a panic elsewhere
    // cannot leave it half-written; recover instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn tick(&self) -> Result<TickOutcome, EngineError> {
        self.lock().tick()
    }

    pub fn deliver_input(&self, value: i64) -> bool {
        self.lock().deliver_input(value)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Consistent copy of all observable state
    pub fn view(&self) -> EngineView {
        self.lock().view()
    }
}
