//! A [`log`] backend for tests which records messages per thread, so that concurrently running
//! tests only ever observe their own traces.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let message = record.args().to_string();
        CAPTURED.with_borrow_mut(|captured| captured.push((record.level(), message)));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALL: Once = Once::new();

/// Runs `f` and returns every record logged on this thread while it ran, alongside its result.
/// Panics raised by `f` are caught and returned as the [`Err`] variant of the result.
pub fn capture_traces<R>(f: impl FnOnce() -> R) -> (std::thread::Result<R>, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        // Another logger being installed first would make every trace assertion fail loudly,
        // there's no need to handle it here.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });

    CAPTURED.with_borrow_mut(Vec::clear);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    let captured = CAPTURED.with_borrow_mut(std::mem::take);
    (result, captured)
}

/// Returns only the messages logged at `level` from a capture.
pub fn messages_at(captured: &[(Level, String)], level: Level) -> Vec<&str> {
    captured.iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, m)| m.as_str())
        .collect()
}
