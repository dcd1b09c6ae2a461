//! Map, filter and reduce over slices.
//!
//! Every function here borrows its input and never mutates it. The caller's
//! function is invoked exactly once per element, in input order, so
//! side-effecting callbacks observe a deterministic sequence of calls.
//!
//! The `try_` variants stop at the first callback error and report the
//! offending position through [`TransformError`].

use tracing::debug;

use crate::error::{Stage, TransformError, TransformResult};

/// Applies `f` to every element, producing a vector of the same length and
/// order.
///
/// ```rust
/// let lengths = stackfold::map(&["One", "Two"], |s| s.len());
/// assert_eq!(lengths, vec![3, 3]);
/// ```
pub fn map<T1, T2, F>(items: &[T1], f: F) -> Vec<T2>
where
    F: FnMut(&T1) -> T2,
{
    items.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` returns `true`, in their
/// original relative order.
///
/// ```rust
/// let words = ["One", "Potato", "Two", "Potato"];
/// let kept = stackfold::filter(&words, |w| *w != "Potato");
/// assert_eq!(kept, vec!["One", "Two"]);
/// ```
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter_refs(items, predicate).into_iter().cloned().collect()
}

/// Like [`filter`], but returns references into `items` instead of clones.
pub fn filter_refs<T, P>(items: &[T], mut predicate: P) -> Vec<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| predicate(item)).collect()
}

/// Left fold: threads an accumulator from `initial` through every element
/// in order and returns the final accumulator.
///
/// `combine` does not need to be associative or commutative; the order of
/// application is always `combine(combine(initial, a), b)` and so on.
///
/// ```rust
/// let sum = stackfold::reduce(&[3, 3], 0, |acc, n| acc + n);
/// assert_eq!(sum, 6);
///
/// let joined = stackfold::reduce(&["a", "b", "c"], String::new(), |acc, s| acc + *s);
/// assert_eq!(joined, "abc");
/// ```
pub fn reduce<T1, T2, F>(items: &[T1], initial: T2, combine: F) -> T2
where
    F: FnMut(T2, &T1) -> T2,
{
    items.iter().fold(initial, combine)
}

/// Fallible [`map`].
///
/// ```rust
/// use stackfold::{try_map, Stage};
///
/// let parsed = try_map(&["1", "2"], |s| s.parse::<i32>()).unwrap();
/// assert_eq!(parsed, vec![1, 2]);
///
/// let err = try_map(&["1", "x", "3"], |s| s.parse::<i32>()).unwrap_err();
/// assert_eq!(err.stage, Stage::Map);
/// assert_eq!(err.index, 1);
/// ```
pub fn try_map<T1, T2, E, F>(items: &[T1], mut f: F) -> TransformResult<Vec<T2>, E>
where
    F: FnMut(&T1) -> Result<T2, E>,
{
    let mut mapped = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let value = f(item).map_err(|source| abort(Stage::Map, index, source))?;
        mapped.push(value);
    }
    Ok(mapped)
}

/// Fallible [`filter`].
pub fn try_filter<T, E, P>(items: &[T], mut predicate: P) -> TransformResult<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item).map_err(|source| abort(Stage::Filter, index, source))? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

/// Fallible [`reduce`].
pub fn try_reduce<T1, T2, E, F>(items: &[T1], initial: T2, mut combine: F) -> TransformResult<T2, E>
where
    F: FnMut(T2, &T1) -> Result<T2, E>,
{
    items
        .iter()
        .enumerate()
        .try_fold(initial, |acc, (index, item)| {
            combine(acc, item).map_err(|source| abort(Stage::Reduce, index, source))
        })
}

fn abort<E>(stage: Stage, index: usize, source: E) -> TransformError<E> {
    debug!(%stage, index, "transform aborted");
    TransformError::new(stage, index, source)
}
