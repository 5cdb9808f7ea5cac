use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};
use tapetty::headless::{run_headless, HeadlessError};
use tapetty::interpreter::errors::EngineError;

#[test]
fn test_headless_echo_until_end_of_input() {
    let summary = run_headless("+[,.]", Cursor::new(b"hi".to_vec()), io::sink(), None)
        .expect("Execution failed");
    assert_eq!(summary.output, "hi\0");
    assert_eq!(summary.cells, vec![0]);
}

#[test]
fn test_headless_counts_ticks() {
    // 60 + 57 ticks for the two dispatches, then round(60 / 1.05^2) = 54 to halt
    let summary = run_headless("++", io::empty(), io::sink(), None).expect("Execution failed");
    assert_eq!(summary.dispatched, 2);
    assert_eq!(summary.ticks, 60 + 57 + 54);
}

#[test]
fn test_headless_tick_limit() {
    let err = run_headless("+[]", io::empty(), io::sink(), Some(500)).unwrap_err();
    assert!(matches!(err, HeadlessError::TickLimit(500)));
}

#[test]
fn test_headless_reports_fault() {
    let err = run_headless("+]", io::empty(), io::sink(), None).unwrap_err();
    assert!(matches!(
        err,
        HeadlessError::Engine(EngineError::UnbalancedBrackets { position: 1, .. })
    ));
}

/// Writer whose contents stay readable after the engine takes ownership of it
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_headless_cat_is_byte_exact_for_non_ascii_input() {
    let input: Vec<u8> = "é€".bytes().chain([0x80, 0xff]).collect();
    let buffer = SharedBuffer::default();

    run_headless(",[.,]", Cursor::new(input.clone()), buffer.clone(), None)
        .expect("Execution failed");

    assert_eq!(*buffer.0.lock().unwrap(), input);
}
