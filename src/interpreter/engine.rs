// Execution engine for the tape interpreter

use crate::interpreter::constants::{BASE_TICKS_PER_STEP, SPEED_GROWTH};
use crate::interpreter::errors::EngineError;
use crate::interpreter::jumps::ScanDirection;
use crate::memory::Tape;
use crate::parser::{Instruction, Program};
use crate::snapshot::{EngineView, NullSink, OutputSink};
use rustc_hash::FxHashMap;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The accumulator has not reached the threshold yet
    Idle,
    /// Waiting for [`Engine::deliver_input`]; the accumulator still advanced
    Blocked,
    /// Exactly one instruction was dispatched
    Dispatched(Instruction),
    /// The instruction pointer is past the last instruction
    Halted,
}

/// The engine: owns the tape, the filtered program and the step clock
pub struct Engine {
    pub(crate) program: Program,

    tape: Tape,

    /// `None` until the first dispatch, then an index into `program`;
    /// `Some(program.len())` means halted
    instruction_pointer: Option<usize>,

    /// Grows by `SPEED_GROWTH` per dispatched instruction, never reset within a run
    speed_multiplier: f64,

    /// Ticks since the last dispatch
    step_accumulator: u64,

    blocked_on_input: bool,

    /// Everything written by `.` this run
    output: String,

    /// Instructions dispatched this run
    dispatched: u64,

    /// Set once a structural error has been raised; cleared only by `reset`
    fault: Option<EngineError>,

    /// Resolved bracket partners, both directions
    pub(crate) jump_table: FxHashMap<usize, usize>,

    sink: Box<dyn OutputSink>,
}

impl Engine {
    /// Create an engine for an already filtered program
    pub fn new(program: Program) -> Self {
        Engine {
            program,
            tape: Tape::new(),
            instruction_pointer: None,
            speed_multiplier: 1.0,
            step_accumulator: 0,
            blocked_on_input: false,
            output: String::new(),
            dispatched: 0,
            fault: None,
            jump_table: FxHashMap::default(),
            sink: Box::new(NullSink),
        }
    }

    /// Filter `source` down to the instruction alphabet and load it
    pub fn from_source(source: &str) -> Self {
        Self::new(Program::parse(source))
    }

    /// Forward every `.` character to `sink` as well as the output log
    pub fn with_sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Advance the step clock by one external tick.
    ///
    /// Dispatches at most one instruction, once the accumulator reaches
    /// [`Engine::tick_threshold`]. Ticks on a halted engine change nothing.
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.is_halted() {
            return Ok(TickOutcome::Halted);
        }

        self.step_accumulator += 1;

        if self.blocked_on_input {
            return Ok(TickOutcome::Blocked);
        }
        if self.step_accumulator < self.tick_threshold() {
            return Ok(TickOutcome::Idle);
        }

        let outcome = self.dispatch();
        self.step_accumulator = 0;
        outcome
    }

    /// Advance the instruction pointer and execute what it lands on
    fn dispatch(&mut self) -> Result<TickOutcome, EngineError> {
        let ip = self.instruction_pointer.map_or(0, |ip| ip + 1);
        self.instruction_pointer = Some(ip);

        let Some(instruction) = self.program.get(ip) else {
            log::info!(
                "halted after {} instructions (speed x{:.3})",
                self.dispatched,
                self.speed_multiplier
            );
            return Ok(TickOutcome::Halted);
        };

        self.speed_multiplier *= SPEED_GROWTH;
        self.dispatched += 1;
        log::trace!("dispatch #{} at {}: {}", self.dispatched, ip, instruction);

        match instruction {
            Instruction::Right => self.tape.move_pointer_right(),
            Instruction::Left => self.tape.move_pointer_left(),
            Instruction::Increment => self.tape.increment_cell(),
            Instruction::Decrement => self.tape.decrement_cell(),
            Instruction::Output => {
                let c = cell_to_char(self.tape.read_cell());
                self.output.push(c);
                self.sink.emit(c);
            }
            Instruction::Input => self.blocked_on_input = true,
            Instruction::LoopStart => {
                if self.tape.read_cell() == 0 {
                    self.jump_to_partner(ip, ScanDirection::Forward)?;
                }
            }
            Instruction::LoopEnd => {
                if self.tape.read_cell() != 0 {
                    self.jump_to_partner(ip, ScanDirection::Backward)?;
                }
            }
        }

        Ok(TickOutcome::Dispatched(instruction))
    }

    fn jump_to_partner(&mut self, from: usize, direction: ScanDirection) -> Result<(), EngineError> {
        match self.jump(from, direction) {
            Ok(to) => {
                self.instruction_pointer = Some(to);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                self.fault = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Store `value` in the current cell if the engine is waiting for input.
    ///
    /// Returns whether the value was consumed. Input that arrives while the
    /// engine is not blocked is dropped, not buffered.
    pub fn deliver_input(&mut self, value: i64) -> bool {
        if !self.blocked_on_input {
            return false;
        }
        self.tape.write_cell(value);
        self.blocked_on_input = false;
        log::debug!("input {} delivered", value);
        true
    }

    /// Start the same program over on a fresh tape
    pub fn reset(&mut self) {
        self.tape = Tape::new();
        self.instruction_pointer = None;
        self.speed_multiplier = 1.0;
        self.step_accumulator = 0;
        self.blocked_on_input = false;
        self.output.clear();
        self.dispatched = 0;
        self.fault = None;
        log::debug!("engine reset");
    }

    /// Ticks the accumulator must reach before the next dispatch
    pub fn tick_threshold(&self) -> u64 {
        (BASE_TICKS_PER_STEP / self.speed_multiplier).round() as u64
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// `None` before the first dispatch, `Some(program().len())` once halted
    pub fn instruction_pointer(&self) -> Option<usize> {
        self.instruction_pointer
    }

    /// The instruction currently under the pointer, if any
    pub fn current_instruction(&self) -> Option<Instruction> {
        self.instruction_pointer.and_then(|ip| self.program.get(ip))
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_blocked_on_input(&self) -> bool {
        self.blocked_on_input
    }

    pub fn is_halted(&self) -> bool {
        self.instruction_pointer
            .is_some_and(|ip| ip >= self.program.len())
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn step_accumulator(&self) -> u64 {
        self.step_accumulator
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn fault(&self) -> Option<&EngineError> {
        self.fault.as_ref()
    }

    /// Copy out everything a renderer needs for one frame
    pub fn view(&self) -> EngineView {
        EngineView {
            program: self.program.clone(),
            cells: self.tape.cells().to_vec(),
            pointer: self.tape.pointer(),
            occupied_width: self.tape.occupied_width(),
            instruction_pointer: self.instruction_pointer,
            output: self.output.clone(),
            blocked_on_input: self.blocked_on_input,
            halted: self.is_halted(),
            speed_multiplier: self.speed_multiplier,
            step_accumulator: self.step_accumulator,
            tick_threshold: self.tick_threshold(),
            dispatched: self.dispatched,
            fault: self.fault.clone(),
        }
    }
}

/// Cells print as the Unicode scalar with that value, or U+FFFD if there is none
fn cell_to_char(value: i64) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
