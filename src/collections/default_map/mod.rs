//! A module containing [`DefaultMap`] and associated types.
//!
//! The other included types are for iteration, providing owned, borrowed and mutably borrowed
//! iteration over entries, keys or values in a map. All of them visit entries in insertion order.
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of a DefaultMap in
//! place would cause a logic error.
//!
//! [`DefaultMap`] is also re-exported under the parent module.

mod default_map;
mod iter;

pub use default_map::*;
pub use iter::*;
