// Read-only views of engine state and the external output sink

use crate::interpreter::errors::EngineError;
use crate::parser::Program;
use std::io::Write;
use std::sync::mpsc::Sender;

/// Receives every character emitted by the `.` instruction
pub trait OutputSink: Send {
    fn emit(&mut self, c: char);
}

/// Discards output; the engine's own output log still records it
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _c: char) {}
}

impl OutputSink for Sender<char> {
    fn emit(&mut self, c: char) {
        // A dropped receiver just means nobody is listening anymore
        let _ = self.send(c);
    }
}

/// Adapts a byte stream into a sink, flushing after every character.
///
/// Characters up to U+00FF are written as that single byte, so a program
/// fed raw input bytes writes the same bytes back. Anything higher cannot
/// come from a byte and is written as UTF-8.
pub struct ByteSink<W: Write + Send>(pub W);

impl<W: Write + Send> OutputSink for ByteSink<W> {
    fn emit(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let bytes: &[u8] = match u8::try_from(c) {
            Ok(byte) => {
                buf[0] = byte;
                &buf[..1]
            }
            Err(_) => c.encode_utf8(&mut buf).as_bytes(),
        };
        if let Err(e) = self.0.write_all(bytes).and_then(|_| self.0.flush()) {
            log::warn!("output sink write failed: {}", e);
        }
    }
}

/// Everything the renderer polls once per frame, copied out in one piece
#[derive(Debug, Clone)]
pub struct EngineView {
    pub program: Program,
    pub cells: Vec<i64>,
    pub pointer: usize,
    pub occupied_width: f64,
    /// `None` before the first dispatch; `Some(program.len())` once halted
    pub instruction_pointer: Option<usize>,
    pub output: String,
    pub blocked_on_input: bool,
    pub halted: bool,
    pub speed_multiplier: f64,
    pub step_accumulator: u64,
    pub tick_threshold: u64,
    pub dispatched: u64,
    pub fault: Option<EngineError>,
}

impl EngineView {
    /// Index of the instruction to highlight, if it lies inside the program
    pub fn highlighted_index(&self) -> Option<usize> {
        self.instruction_pointer.filter(|&ip| ip < self.program.len())
    }
}
