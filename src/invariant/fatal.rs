use std::backtrace::{Backtrace, BacktraceStatus};
use std::convert::Infallible;
use std::fmt::Debug;

use log::Level;

/// The message used by [`panic`] when none is provided.
pub const PANIC_MESSAGE: &str = "This should not happen";

/// The message used by [`assert`] when none is provided.
pub const ASSERT_MESSAGE: &str = "Assertion failed";

/// The message used by [`assert_never`] when none is provided.
pub const NEVER_MESSAGE: &str = "`never` happened";

/// The message used by [`defined`], which is followed by the reason if one is provided.
pub const UNDEFINED_MESSAGE: &str = "Value was undefined but should be defined";

/// Logs `message` at `level`, followed by a backtrace at debug level if the environment enables
/// backtrace capture.
fn trace(level: Level, message: &str) {
    log::log!(level, "{message}");

    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        log::debug!("{backtrace}");
    }
}

/// Traces `message` (or [`PANIC_MESSAGE`]) and panics with it.
///
/// # Panics
/// Always.
#[track_caller]
pub fn panic(message: Option<&str>) -> ! {
    let message = message.unwrap_or(PANIC_MESSAGE);
    trace(Level::Error, message);
    panic!("{message}")
}

/// Asserts that `fact` holds. If it doesn't, [`panic`]s with `message` (or [`ASSERT_MESSAGE`]).
/// Nothing is traced when the assertion holds.
///
/// # Panics
/// Panics if `fact` is false.
#[track_caller]
pub fn assert(fact: bool, message: Option<&str>) {
    if fact {
        return;
    }
    panic(Some(message.unwrap_or(ASSERT_MESSAGE)))
}

/// Marks a branch that should be impossible but which the compiler can't prove unreachable, such as
/// the catch-all arm of a match on a `#[non_exhaustive]` enum. If reached, [`panic`]s with `message`
/// (or [`NEVER_MESSAGE`]).
///
/// When the value is genuinely uninhabited, prefer [`absurd`], which the compiler checks.
///
/// # Panics
/// Always.
#[track_caller]
pub fn assert_never<T: Debug>(value: T, message: Option<&str>) -> ! {
    let message = message.unwrap_or(NEVER_MESSAGE);
    log::debug!("unexpected value: {value:?}");
    panic(Some(message))
}

/// Like [`assert_never`], but rather than panicking, traces `message` at warn level and returns the
/// `fallback` so that the caller can carry on.
pub fn prove_never<T: Debug, R>(value: T, message: &str, fallback: R) -> R {
    trace(Level::Warn, message);
    log::debug!("unexpected value: {value:?}");
    fallback
}

/// Converts an uninhabited value into any type. Only compiles if `never` is of an empty type, so
/// reaching this is statically impossible.
pub const fn absurd<T>(never: Infallible) -> T {
    match never {}
}

/// Returns the value inside `value`, or [`panic`]s with [`UNDEFINED_MESSAGE`], followed by
/// `" because: {reason}"` if a `reason` is provided.
///
/// Only [`None`] counts as undefined, a contained value which is "empty" itself (`0`, `false` or a
/// nested [`None`]) is returned as is.
///
/// # Panics
/// Panics if `value` is [`None`].
#[track_caller]
pub fn defined<T>(value: Option<T>, reason: Option<&str>) -> T {
    match value {
        Some(value) => value,
        None => match reason {
            Some(reason) => panic(Some(&format!("{UNDEFINED_MESSAGE} because: {reason}"))),
            None => panic(Some(UNDEFINED_MESSAGE)),
        },
    }
}

/// Does nothing, but only compiles if `_value` is of type `T`.
pub const fn prove_type<T>(_value: &T) {}
