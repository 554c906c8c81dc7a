//! Assertion and defensive-programming helpers.
//!
//! Everything here reports a broken invariant the same way: a diagnostic trace is logged through
//! [`log`] at [`Error`](log::Level::Error) level (with a backtrace at
//! [`Debug`](log::Level::Debug) level when one is captured), then the current thread panics with
//! the message. Nothing in this crate catches these panics, recovering is left to the caller, for
//! example with [`catch_exception`](crate::exception::catch_exception).
//!
//! All functions are `#[track_caller]`, so the panic reports the location of the call rather than a
//! location inside this module.

mod fatal;

pub use fatal::*;
