//! Traits describing capabilities shared by the collections in this crate.

mod readonly_map;

pub use readonly_map::*;
