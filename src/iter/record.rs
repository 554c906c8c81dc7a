/// Maps `f` over the values of `record`, keeping every key. `f` receives each value along with its
/// key.
///
/// ```
/// # use std::collections::BTreeMap;
/// # use lang_util::iter::map_record;
/// let prices = BTreeMap::from([("apple", 3), ("pear", 4)]);
/// let doubled: BTreeMap<_, _> = map_record(prices, |price, _| price * 2);
/// assert_eq!(doubled, BTreeMap::from([("apple", 6), ("pear", 8)]));
/// ```
pub fn map_record<K, V, U, C>(
    record: impl IntoIterator<Item = (K, V)>,
    mut f: impl FnMut(V, &K) -> U,
) -> C
where
    C: FromIterator<(K, U)>,
{
    record.into_iter()
        .map(|(key, value)| {
            let mapped = f(value, &key);
            (key, mapped)
        })
        .collect()
}

/// Maps `f` over the values of `record`, keeping only the keys whose result is [`Some`].
pub fn map_record_filter_undefined<K, V, U, C>(
    record: impl IntoIterator<Item = (K, V)>,
    mut f: impl FnMut(V, &K) -> Option<U>,
) -> C
where
    C: FromIterator<(K, U)>,
{
    record.into_iter()
        .filter_map(|(key, value)| f(value, &key).map(|mapped| (key, mapped)))
        .collect()
}
