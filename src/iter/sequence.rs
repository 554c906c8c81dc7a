/// Maps `f` over `iterable`, collecting every result that is [`Some`].
///
/// `f` also receives the position of each element, counting every element of the input including
/// those whose result is dropped.
pub fn map_filter_undefined<I, U>(iterable: I, mut f: impl FnMut(I::Item, usize) -> Option<U>) -> Vec<U>
where
    I: IntoIterator,
{
    iterable.into_iter()
        .enumerate()
        .filter_map(|(index, item)| f(item, index))
        .collect()
}

/// Collects every element of `iterable` that is [`Some`], in order.
pub fn filter_undefined<T>(iterable: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    iterable.into_iter().flatten().collect()
}
