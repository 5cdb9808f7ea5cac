// Timing constants for the step clock

/// Ticks required before the first dispatch, divided by the speed multiplier
/// for every later one
pub const BASE_TICKS_PER_STEP: f64 = 60.0;

/// Factor applied to the speed multiplier after every dispatched instruction
pub const SPEED_GROWTH: f64 = 1.05;

/// Default rate of the external tick source, in ticks per second
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
