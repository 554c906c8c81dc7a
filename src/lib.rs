//! This crate is a small collection of language-level helpers that I keep reaching for: a map
//! that fills in missing keys by itself, branded strings, and a handful of assertion and
//! defensive-programming functions.
//!
//! # Purpose
//! None of these are complicated, which is exactly why they end up rewritten in every project.
//! Collecting them in one place means that each gets written (and tested) properly once, with the
//! awkward edge cases pinned down, rather than being reinvented slightly wrong every time.
//!
//! # The Default Map
//! The centrepiece is [`DefaultMap`](collections::DefaultMap), which synthesizes a value the first
//! time a missing key is looked up. The one edge case that really matters there is telling "no
//! entry" apart from "an entry holding an empty value": a map of `Option`s which recomputes its
//! default whenever it finds a `None` is subtly broken. DefaultMap decides presence through its
//! own bookkeeping, never by looking at values.
//!
//! # Error Handling
//! For a library like this, broken invariants are bugs in the caller, not conditions to recover
//! from, so the helpers in [`invariant`] panic. They always log a trace through [`log`] before doing
//! so, which means the failure shows up in whatever logger the application has installed even if
//! the panic itself is caught further up. The crate never installs a logger itself.
//!
//! When a panic does need to become a value (e.g. at a thread or task boundary), [`exception`]
//! converts panic payloads into strings or strongly typed errors.
//!
//! # Dependencies
//! [`DefaultMap`](collections::DefaultMap) is built on `indexmap`, so that iteration follows
//! insertion order. [`time`] relies on `tokio`'s timer. Errors use `derive_more` because it removes
//! the need for some very repetitive programming.
//!
//! # Features
//! - `collections-all` (default): all collection types and traits.
//! - `default-map`: [`DefaultMap`](collections::DefaultMap).
//! - `traits`: [`ReadonlyDefaultMap`](collections::ReadonlyDefaultMap).
//! - `time` (default): [`time::sleep`].

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod brand;
#[cfg(feature = "collections")]
pub mod collections;
pub mod enums;
pub mod exception;
pub mod invariant;
pub mod iter;
pub mod option;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
