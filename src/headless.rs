//! Run a program without the terminal UI
//!
//! Ticks are issued back to back, so the step clock still decides how many
//! ticks each instruction costs but no wall-clock time is spent waiting.
//! Every input request is answered with the next byte of the reader; once it
//! is exhausted the engine receives 0, which ends the usual `,[...]` loops.
//! Output cells up to 255 go back out as single bytes, so copying input to
//! output is byte-exact.

use crate::interpreter::engine::{Engine, TickOutcome};
use crate::interpreter::errors::EngineError;
use crate::snapshot::ByteSink;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Errors from a headless run
#[derive(Error, Debug)]
pub enum HeadlessError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error("Tick limit of {0} reached before the program halted")]
    TickLimit(u64),
}

/// Summary of a finished headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub dispatched: u64,
    pub output: String,
    pub cells: Vec<i64>,
    pub pointer: usize,
}

/// Run `source` to completion, reading input bytes from `input` and writing
/// output characters to `output` as they are produced
pub fn run_headless<R, W>(
    source: &str,
    mut input: R,
    output: W,
    max_ticks: Option<u64>,
) -> Result<RunSummary, HeadlessError>
where
    R: Read,
    W: Write + Send + 'static,
{
    let mut engine = Engine::from_source(source).with_sink(ByteSink(output));
    let mut ticks: u64 = 0;

    loop {
        if max_ticks.is_some_and(|limit| ticks >= limit) {
            return Err(HeadlessError::TickLimit(ticks));
        }

        if engine.is_blocked_on_input() {
            let value = read_byte(&mut input)?.map_or(0, i64::from);
            engine.deliver_input(value);
        }

        ticks += 1;
        if engine.tick()? == TickOutcome::Halted {
            break;
        }
    }

    Ok(RunSummary {
        ticks,
        dispatched: engine.dispatched(),
        output: engine.output().to_string(),
        cells: engine.tape().cells().to_vec(),
        pointer: engine.tape().pointer(),
    })
}

fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
