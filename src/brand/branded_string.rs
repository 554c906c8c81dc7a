use std::any;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// A [`String`] tagged with the brand `B`. See the [module documentation](crate::brand).
///
/// Comparison, ordering and hashing only consider the contents, and never require anything of `B`.
pub struct BrandedString<B> {
    value: String,
    _brand: PhantomData<fn() -> B>,
}

impl<B> BrandedString<B> {
    /// Brands `value` with `B`.
    pub fn new(value: impl Into<String>) -> BrandedString<B> {
        BrandedString {
            value: value.into(),
            _brand: PhantomData,
        }
    }

    /// Returns the contents as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Removes the brand, returning the contents.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Moves the contents to a different brand.
    pub fn rebrand<C>(self) -> BrandedString<C> {
        BrandedString::new(self.value)
    }
}

/// Brands `value` with `B`.
pub fn brand_string<B>(value: impl Into<String>) -> BrandedString<B> {
    BrandedString::new(value)
}

/// Returns a function which brands string slices with `B`, for use where a branding function is
/// passed around or mapped over.
///
/// ```
/// # use lang_util::brand::{make_brand_string, BrandedString};
/// enum Orange {}
/// let make_orange = make_brand_string::<Orange>();
/// let oranges: Vec<BrandedString<Orange>> = ["Navel", "Valencia"].into_iter().map(make_orange).collect();
/// assert_eq!(oranges[0], "Navel");
/// ```
pub fn make_brand_string<B>() -> fn(&str) -> BrandedString<B> {
    |value| BrandedString::new(value)
}

impl<B> Clone for BrandedString<B> {
    fn clone(&self) -> Self {
        BrandedString::new(self.value.clone())
    }
}

impl<B> Deref for BrandedString<B> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<B> AsRef<str> for BrandedString<B> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<B> Borrow<str> for BrandedString<B> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<B> From<BrandedString<B>> for String {
    fn from(value: BrandedString<B>) -> Self {
        value.value
    }
}

impl<B> PartialEq for BrandedString<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B> Eq for BrandedString<B> {}

impl<B> PartialEq<str> for BrandedString<B> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<B> PartialEq<&str> for BrandedString<B> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<B> PartialOrd for BrandedString<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B> Ord for BrandedString<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<B> Hash for BrandedString<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match str's hash for Borrow<str>.
        self.value.as_str().hash(state)
    }
}

impl<B> Debug for BrandedString<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let brand = any::type_name::<B>();
        let brand = brand.rsplit("::").next().unwrap_or(brand);
        write!(f, "BrandedString<{brand}>({:?})", self.value)
    }
}

impl<B> Display for BrandedString<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}
