//! Collection types which build on a plain map with extra semantics.
//!
//! # Purpose
//! The standard maps make a missing key the caller's problem: every lookup hands back an
//! [`Option`]. The types here take that responsibility over, synthesizing a value for a missing key
//! the first time it is looked up and remembering it afterwards.
//!
//! # Method
//! Types wrap an existing map rather than dereferencing to one, so that no operation of the inner
//! map can sidestep the extra semantics.

#[cfg(feature = "default-map")]
pub mod default_map;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "default-map")]
#[doc(inline)]
pub use default_map::DefaultMap;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use traits::ReadonlyDefaultMap;
