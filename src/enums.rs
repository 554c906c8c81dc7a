//! Introspection of fieldless enums.
//!
//! Rust enums don't carry a runtime list of their values, so membership is decided by attempting
//! the conversion from the raw representation. For a fieldless enum, that conversion can be derived:
//!
//! ```
//! # use lang_util::enums::is_enum_value;
//! #[derive(derive_more::TryFrom)]
//! #[try_from(repr)]
//! #[repr(u8)]
//! enum Suit {
//!     Clubs = 1,
//!     Hearts = 3,
//! }
//!
//! assert!(is_enum_value::<Suit, _>(3_u8));
//! assert!(!is_enum_value::<Suit, _>(2_u8));
//! ```

/// Returns true if `value` is the representation of one of `E`'s values.
pub fn is_enum_value<E: TryFrom<R>, R>(value: R) -> bool {
    E::try_from(value).is_ok()
}
