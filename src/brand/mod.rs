//! Strings with a type-level brand.
//!
//! A branded string is a [`String`] that has a distinct type depending on its brand, so that it can
//! be told apart from other strings at compile time. This is useful to ensure that a string is only
//! used in a specific context, e.g. to keep user IDs from being passed where a file name is
//! expected. Brands are usually empty enums:
//!
//! ```compile_fail
//! # use lang_util::brand::{brand_string, BrandedString};
//! enum Apple {}
//! enum Orange {}
//!
//! let apple: BrandedString<Apple> = brand_string("Pink Lady");
//! let orange: BrandedString<Orange> = apple; // error: mismatched types
//! ```
//!
//! The brand only exists at the type level. At runtime a branded string is just its contents, and
//! it can be used anywhere a `&str` is expected:
//!
//! ```
//! # use lang_util::brand::{brand_string, BrandedString};
//! # enum Apple {}
//! let apple: BrandedString<Apple> = brand_string("Pink Lady");
//! let just_a_str: &str = &apple;
//! assert_eq!(just_a_str, "Pink Lady");
//! ```

mod branded_string;

pub use branded_string::*;
