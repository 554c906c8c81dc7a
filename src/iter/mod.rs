//! Helpers which map over sequences and records while dropping missing results.
//!
//! A "record" here is anything that iterates as key-value pairs, such as the maps in
//! [`std::collections`] or [`DefaultMap`](crate::collections::DefaultMap). The output record type
//! is chosen by the caller through [`FromIterator`].

mod record;
mod sequence;

pub use record::*;
pub use sequence::*;
