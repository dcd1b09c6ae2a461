//! Ordering types for sorting criteria results.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for comparator-based
//! ordering.

use std::cmp::Ordering;
use std::fmt;

/// Sort direction. Ascending unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Flips `ordering` for `Desc`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

type Comparator<'f, T> = Box<dyn Fn(&T, &T) -> Ordering + 'f>;

/// A single ordering clause: a comparator and a direction.
pub struct OrderBy<'f, T> {
    compare: Comparator<'f, T>,
    dir: Dir,
}

impl<'f, T> OrderBy<'f, T> {
    /// Creates an ordering from a comparator and a direction.
    pub fn new<C>(compare: C, dir: Dir) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
    {
        OrderBy {
            compare: Box::new(compare),
            dir,
        }
    }

    /// Ascending ordering by comparator.
    pub fn asc<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
    {
        Self::new(compare, Dir::Asc)
    }

    /// Descending ordering by comparator.
    pub fn desc<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
    {
        Self::new(compare, Dir::Desc)
    }

    /// Orders by a key extracted from each element.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use stackfold::{Dir, OrderBy};
    ///
    /// let by_len = OrderBy::by_key(|s: &&str| s.len(), Dir::Desc);
    /// assert_eq!(by_len.compare(&"One", &"Potato"), Ordering::Greater);
    /// ```
    pub fn by_key<K, F>(key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'f,
    {
        Self::new(move |a: &T, b: &T| key(a).cmp(&key(b)), dir)
    }

    /// The direction of this ordering.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Compares two elements according to this ordering.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.apply((self.compare)(a, b))
    }
}

impl<T> fmt::Debug for OrderBy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// Compares two elements using a list of ordering clauses.
///
/// Uses the first clause as the primary sort key, the second to break ties, etc.
/// If all clauses compare equal, returns `Equal`.
pub fn compare_by_orderings<T>(a: &T, b: &T, orderings: &[OrderBy<'_, T>]) -> Ordering {
    orderings
        .iter()
        .map(|order_by| order_by.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
