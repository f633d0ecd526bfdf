//! Shared helpers for the conformance suite.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, Once};
use verdict::{Outcome, OutcomeError};

static INIT_TRACING: Once = Once::new();

/// Install a global subscriber that writes through the test harness.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Parse a decimal integer, reporting `PARSE_ERROR` on bad input.
pub fn parse_number(input: &str) -> Outcome<i32> {
    match input.trim().parse::<i32>() {
        Ok(n) => Outcome::success(n),
        Err(e) => Outcome::failure_with(OutcomeError::new(
            "PARSE_ERROR",
            format!("'{}' is not a number: {}", input, e),
        )),
    }
}

/// Log lines captured in memory.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn text(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return what it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.text()
}
