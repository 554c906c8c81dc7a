use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "default-map")]
use crate::collections::default_map::{self, DefaultMap};

/// The read-only capability of a map which synthesizes values for missing keys.
///
/// Holders of this capability can look values up, check for entries, count and iterate them, but
/// can't insert, replace, update or remove entries explicitly. Looking up a missing key still
/// synthesizes and stores its default, which is why [`get`](ReadonlyDefaultMap::get) takes
/// `&mut self`: this is a read-default map, not an immutable one.
///
/// ```
/// # use lang_util::collections::{DefaultMap, ReadonlyDefaultMap};
/// fn total<M: ReadonlyDefaultMap<&'static str, u32>>(scores: &mut M) -> u32 {
///     let alice = *scores.get("alice");
///     alice + *scores.get("bob")
/// }
///
/// let mut scores = DefaultMap::with_entries(|_: &&str| 0, [("alice", 3)]);
/// assert_eq!(total(&mut scores), 3);
/// assert!(scores.contains("bob"));
/// ```
pub trait ReadonlyDefaultMap<K, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)> where Self: 'a, K: 'a, V: 'a;

    /// Returns a reference to the value associated with `key`, synthesizing and storing it first if
    /// there is no entry.
    fn get(&mut self, key: K) -> &V;

    /// Returns true if there is an entry for `key`, without synthesizing one.
    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns the number of entries, synthesized ones included.
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all entries, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;
}

#[cfg(feature = "default-map")]
impl<K, V, F, B> ReadonlyDefaultMap<K, V> for DefaultMap<K, V, F, B>
where
    K: Hash + Eq,
    F: FnMut(&K) -> V,
    B: BuildHasher,
{
    type Iter<'a> = default_map::Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn get(&mut self, key: K) -> &V {
        self.get_or_synthesize(key)
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        default_map::Iter(self.map.iter())
    }
}
