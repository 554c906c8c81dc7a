use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use super::PanicError;

/// A panic payload, as returned by [`catch_unwind`](std::panic::catch_unwind).
pub type Exception = Box<dyn Any + Send>;

/// A boxed error which can be sent between threads, the shape most error-handling code expects.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// The marker used when a payload can't be rendered, because rendering it panicked.
pub const UNSTRINGIFIABLE_MESSAGE: &str = "Exception can't be stringified";

/// The rendering used for payloads of a type this module doesn't know, matching the standard
/// library's panic hook.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Returns a human-readable rendering of a panic payload, or an empty string when there is none.
///
/// String payloads (`&'static str` and [`String`], which cover [`panic!`]) are returned as is,
/// boxed errors are rendered with their [`Display`](std::fmt::Display) implementation and any
/// other payload renders as [`OPAQUE_PAYLOAD`].
///
/// If rendering panics, that secondary panic is caught and described instead, as
/// `"Exception can't be stringified: {secondary}"`. This applies recursively, so a payload is
/// always turned into a string.
///
/// Note that the payload must be passed as `Some(&*exception)`: a `&Box<dyn Any + Send>` would
/// itself coerce to `&dyn Any` and describe the box rather than its contents.
pub fn exception_to_string(exception: Option<&(dyn Any + Send)>) -> String {
    let Some(exception) = exception else {
        return String::new();
    };

    match panic::catch_unwind(AssertUnwindSafe(|| describe(exception))) {
        Ok(description) => description,
        Err(secondary) => panic::catch_unwind(AssertUnwindSafe(|| {
            format!("{UNSTRINGIFIABLE_MESSAGE}: {}", exception_to_string(Some(&*secondary)))
        }))
        .unwrap_or_else(|_| UNSTRINGIFIABLE_MESSAGE.to_owned()),
    }
}

/// Returns the panic payload as an error. Payloads which already are a [`BoxError`] (as thrown with
/// [`panic_any`](std::panic::panic_any)) are returned unchanged, anything else is wrapped in a
/// [`PanicError`] carrying [`exception_to_string`]'s rendering.
pub fn exception_to_error(exception: Exception) -> BoxError {
    match exception.downcast::<BoxError>() {
        Ok(error) => *error,
        Err(exception) => match exception.downcast::<PanicError>() {
            Ok(error) => error,
            Err(exception) => Box::new(PanicError::from(exception_to_string(Some(&*exception)))),
        },
    }
}

/// Runs `f`, converting a panic into an error with [`exception_to_error`].
///
/// The panic hook still runs for the caught panic, so it is reported as usual.
pub fn catch_exception<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, BoxError> {
    panic::catch_unwind(f).map_err(exception_to_error)
}

fn describe(exception: &(dyn Any + Send)) -> String {
    if let Some(message) = exception.downcast_ref::<&'static str>() {
        return (*message).to_owned();
    }
    if let Some(message) = exception.downcast_ref::<String>() {
        return message.clone();
    }
    if let Some(error) = exception.downcast_ref::<BoxError>() {
        return error.to_string();
    }
    if let Some(error) = exception.downcast_ref::<Box<dyn Error + Send>>() {
        return error.to_string();
    }
    if let Some(error) = exception.downcast_ref::<PanicError>() {
        return error.to_string();
    }
    OPAQUE_PAYLOAD.to_owned()
}
