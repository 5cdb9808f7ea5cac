//! Fixed-rate tick source
//!
//! [`Ticker`] owns a background thread that calls [`SharedEngine::tick`] once
//! per period. Timing inside the engine is counted in ticks, so the rate only
//! decides how fast the run looks on screen.

use crate::interpreter::shared::SharedEngine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Background thread driving an engine at a fixed rate
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking `engine` `rate_hz` times per second
    pub fn start(engine: SharedEngine, rate_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(rate_hz.max(1)));
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut next = Instant::now() + period;
                while !stop.load(Ordering::Relaxed) {
                    if let Err(e) = engine.tick() {
                        log::error!("tick source stopped: {}", e);
                        break;
                    }
                    let now = Instant::now();
                    if next > now {
                        thread::sleep(next - now);
                    }
                    next += period;
                }
            })
        };

        Ticker {
            stop,
            handle: Some(handle),
        }
    }

    /// False once the thread has exited, e.g. after a fault
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread and wait for it
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("tick thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::Engine;

    #[test]
    fn test_ticker_drives_engine_to_halt() {
        let shared = SharedEngine::new(Engine::from_source("+>+"));
        let mut ticker = Ticker::start(shared.clone(), 10_000);

        let deadline = Instant::now() + Duration::from_secs(10);
        while !shared.view().halted && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        ticker.shutdown();

        let view = shared.view();
        assert!(view.halted);
        assert_eq!(view.cells, vec![1, 1]);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_ticker_exits_on_fault() {
        let shared = SharedEngine::new(Engine::from_source("+]"));
        let ticker = Ticker::start(shared.clone(), 10_000);

        let deadline = Instant::now() + Duration::from_secs(10);
        while ticker.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!ticker.is_running());
        assert!(shared.view().fault.is_some());
    }
}
