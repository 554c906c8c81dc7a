//! Combinators over [`Option`]s that the standard library doesn't provide directly.

/// Combines two optional values. If both are [`None`], returns [`None`]. If exactly one is
/// [`Some`], returns it. If both are, returns `Some(f(a, b))`.
///
/// ```
/// # use lang_util::option::reduce_two;
/// assert_eq!(reduce_two(Some(5), None, |a, b| a + b), Some(5));
/// assert_eq!(reduce_two(Some(5), Some(10), |a, b| a + b), Some(15));
/// ```
pub fn reduce_two<T>(a: Option<T>, b: Option<T>, f: impl FnOnce(T, T) -> T) -> Option<T> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => Some(f(a, b)),
    }
}

/// Applies `f` to the value inside `x` if there is one, otherwise passes the [`None`] through.
///
/// This is [`Option::map`] as a free function, for symmetry with [`reduce_two`].
pub fn defined_map<T, U>(x: Option<T>, f: impl FnOnce(T) -> U) -> Option<U> {
    x.map(f)
}
