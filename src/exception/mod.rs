//! Normalization of panic payloads.
//!
//! A panic can carry any `'static` value as its payload, which is how [`catch_unwind`] hands it
//! back: a [`Box<dyn Any + Send>`](Exception). The functions here turn such a payload into
//! something displayable or into an [`Error`](std::error::Error), coping with payloads whose own
//! formatting panics.
//!
//! [`catch_unwind`]: std::panic::catch_unwind

mod error;
mod normalize;

pub use error::*;
pub use normalize::*;
