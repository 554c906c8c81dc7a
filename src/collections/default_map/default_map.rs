use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use indexmap::IndexMap;

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::util::fmt::DebugRaw;

/// A map of keys to values which synthesizes a value for any key that is looked up while absent,
/// storing it before returning it.
///
/// Values are produced by a factory closure provided at construction time. The factory receives
/// the missing key and is only ever invoked by [`get`](DefaultMap::get) and
/// [`update`](DefaultMap::update) when there is no entry for that key. Presence is decided by the
/// map's own bookkeeping and never by inspecting the stored value, so a stored value that
/// represents "nothing" (e.g. [`None`] when `V` is an [`Option`]) is still a present entry and is
/// returned as is.
///
/// ```
/// # use lang_util::collections::DefaultMap;
/// let mut groups = DefaultMap::new(|_: &&str| Vec::new());
/// groups.get("odd").push(1);
/// groups.get("odd").push(3);
/// groups.get("even");
///
/// assert_eq!(groups.get("odd"), &[1, 3]);
/// assert_eq!(groups.len(), 2);
/// ```
///
/// Entries are kept in insertion order, which is the order used by all iterators. Removing an entry
/// keeps the relative order of the remaining ones.
///
/// As with any map, it is a logic error for keys to be manipulated in a way that changes their hash.
/// Because of this, DefaultMap's API prevents mutable access to its keys.
///
/// DefaultMap has no internal synchronization. Every operation which may insert, `get` included,
/// takes `&mut self`, so sharing a map between threads requires an external lock.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the DefaultMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)`*, plus one factory call if absent |
/// | `insert` | `O(1)`* |
/// | `update` | `O(1)`*, plus one factory call if absent |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, growing the backing storage takes `O(n)`. Hash collisions add time while the
/// matching entry is found.
pub struct DefaultMap<K: Hash + Eq, V, F: FnMut(&K) -> V, B: BuildHasher = RandomState> {
    pub(crate) map: IndexMap<K, V, B>,
    pub(crate) factory: F,
}

/// The factory used by maps created with [`DefaultMap::from_default`].
fn default_value<K, V: Default>(_key: &K) -> V {
    V::default()
}

impl<K: Hash + Eq, V, F: FnMut(&K) -> V> DefaultMap<K, V, F> {
    /// Creates a new, empty DefaultMap which uses `factory` to produce the value for a missing key.
    /// Memory will be allocated when the first entry is added.
    pub fn new(factory: F) -> DefaultMap<K, V, F> {
        DefaultMap {
            map: IndexMap::default(),
            factory,
        }
    }

    /// Creates a new, empty DefaultMap with the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize, factory: F) -> DefaultMap<K, V, F> {
        DefaultMap {
            map: IndexMap::with_capacity_and_hasher(cap, RandomState::new()),
            factory,
        }
    }

    /// Creates a new DefaultMap containing the provided `entries`, which are inserted in order with
    /// the same semantics as [`insert`](DefaultMap::insert). The factory isn't invoked.
    pub fn with_entries<I>(factory: F, entries: I) -> DefaultMap<K, V, F>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = DefaultMap::new(factory);
        map.extend(entries);
        map
    }
}

impl<K: Hash + Eq, V: Default> DefaultMap<K, V, fn(&K) -> V> {
    /// Creates a new, empty DefaultMap which fills missing keys with [`V::default()`](Default).
    pub fn from_default() -> DefaultMap<K, V, fn(&K) -> V> {
        DefaultMap::new(default_value::<K, V>)
    }
}

impl<K: Hash + Eq, V, F: FnMut(&K) -> V, B: BuildHasher> DefaultMap<K, V, F, B> {
    /// Creates a new, empty DefaultMap with the provided `hasher`.
    pub fn with_hasher(factory: F, hasher: B) -> DefaultMap<K, V, F, B> {
        DefaultMap {
            map: IndexMap::with_hasher(hasher),
            factory,
        }
    }

    /// Creates a new, empty DefaultMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, factory: F, hasher: B) -> DefaultMap<K, V, F, B> {
        DefaultMap {
            map: IndexMap::with_capacity_and_hasher(cap, hasher),
            factory,
        }
    }

    /// Returns the number of entries in the DefaultMap, synthesized ones included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the DefaultMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the current capacity of the DefaultMap.
    pub fn cap(&self) -> usize {
        self.map.capacity()
    }

    /// Returns a mutable reference to the value associated with `key`. If there is no entry for
    /// `key`, the factory is invoked once to produce a value, which is stored before the reference
    /// to it is returned.
    ///
    /// An existing entry is returned without invoking the factory, no matter what its value is.
    /// Although this reads like a lookup, it is a mutation of the map whenever the key is absent.
    ///
    /// Panics raised by the factory propagate to the caller and leave the map unchanged.
    pub fn get(&mut self, key: K) -> &mut V {
        self.get_or_synthesize(key)
    }

    /// Associates `value` with `key`, regardless of whether an entry exists. If the key was already
    /// associated with a value, stored or synthesized, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists, and the entry
    /// keeps its position in the iteration order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Replaces the value associated with `key` by `f` applied to the current value, or to the
    /// default if the key is absent, and returns a mutable reference to the new value.
    ///
    /// These two lines are equivalent:
    /// ```
    /// # use lang_util::collections::DefaultMap;
    /// # let mut map = DefaultMap::new(|_: &&str| 0);
    /// let next = *map.get("foo") + 1; map.insert("foo", next);
    /// map.update("foo", |count| count + 1);
    /// # assert_eq!(*map.get("foo"), 2);
    /// ```
    ///
    /// Panics raised by `f` propagate to the caller. In that case the entry is left as `get` left
    /// it, so a default that was synthesized for the call stays stored.
    pub fn update(&mut self, key: K, f: impl FnOnce(&V) -> V) -> &mut V {
        let value = self.get_or_synthesize(key);
        let updated = f(value);
        *value = updated;
        value
    }

    /// Returns true if there is an entry for the provided `key`. The factory is never invoked.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Removes the entry associated with `key`, returning it if it existed. A later `get` for the
    /// same key invokes the factory again.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.shift_remove_entry(key)
    }

    /// Removes the entry associated with `key`, returning the value if it existed. An entry was
    /// removed if and only if this returns [`Some`].
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes all entries from the DefaultMap, dropping their values. The capacity and the factory
    /// are kept.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Increases the capacity of the DefaultMap to ensure that len + `extra` entries will fit
    /// without reallocation.
    pub fn reserve(&mut self, extra: usize) {
        self.map.reserve(extra)
    }

    /// Returns an iterator over all key-value pairs in the DefaultMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the DefaultMap, with the values as mutable
    /// references.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the DefaultMap, as references.
    pub fn keys<'a>(&'a self) -> Keys<'a, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the DefaultMap, as mutable references.
    pub fn values_mut<'a>(&'a mut self) -> ValuesMut<'a, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the DefaultMap, as references.
    pub fn values<'a>(&'a self) -> Values<'a, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, F: FnMut(&K) -> V, B: BuildHasher> DefaultMap<K, V, F, B> {
    /// Returns the entry for `key`, creating it with the factory first if it is vacant.
    ///
    /// Presence is decided once, through the entry, so a stored value is never mistaken for a
    /// vacancy.
    pub(crate) fn get_or_synthesize(&mut self, key: K) -> &mut V {
        let factory = &mut self.factory;
        self.map.entry(key).or_insert_with_key(|k| factory(k))
    }
}

impl<K: Hash + Eq, V, F: FnMut(&K) -> V, B: BuildHasher> Extend<(K, V)> for DefaultMap<K, V, F, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V: Default> Default for DefaultMap<K, V, fn(&K) -> V> {
    fn default() -> Self {
        DefaultMap::from_default()
    }
}

impl<K, V, F, B> Clone for DefaultMap<K, V, F, B>
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: FnMut(&K) -> V + Clone,
    B: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        DefaultMap {
            map: self.map.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<K, V, F, B> PartialEq for DefaultMap<K, V, F, B>
where
    K: Hash + Eq,
    V: PartialEq,
    F: FnMut(&K) -> V,
    B: BuildHasher,
{
    /// Two DefaultMaps are equal if they contain the same entries, regardless of order. Factories
    /// can't be compared and aren't considered.
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Hash + Eq + Debug, V: Debug, F: FnMut(&K) -> V, B: BuildHasher + Debug> Debug
    for DefaultMap<K, V, F, B>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultMap")
            .field("entries", &self.map)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("factory", &DebugRaw("<closure>"))
            .field("hasher", self.map.hasher())
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, F: FnMut(&K) -> V, B: BuildHasher> Display
    for DefaultMap<K, V, F, B>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
