#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod capture;
#[cfg(feature = "default-map")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
