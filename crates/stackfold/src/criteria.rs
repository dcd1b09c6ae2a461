//! Predicate builder and executor.
//!
//! [`Criteria`] assembles a filter predicate from clause groups, then runs it
//! over a slice through [`filter_refs`](crate::filter_refs), optionally
//! sorting and paging the results.

use std::fmt;

use tracing::trace;

use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::transform::filter_refs;

type Predicate<'f, T> = Box<dyn Fn(&T) -> bool + 'f>;

/// A composable filter over elements of type `T`.
///
/// Criteria consist of three clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
/// - **NOT**: No clause may match
///
/// The overall match logic is:
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// # Example
///
/// ```
/// use stackfold::{Criteria, Dir};
///
/// let words = ["One", "Potato", "Two", "Potato", "Three"];
///
/// let criteria = Criteria::new()
///     .not_eq("Potato")
///     .or(|w: &&str| w.starts_with('T'))
///     .or(|w: &&str| w.len() == 3)
///     .order_by_key(|w: &&str| w.len(), Dir::Desc)
///     .limit(2)
///     .build();
///
/// let results = criteria.filter(&words);
/// assert_eq!(results, vec![&"Three", &"One"]);
/// ```
pub struct Criteria<'f, T> {
    and_clauses: Vec<Predicate<'f, T>>,
    or_clauses: Vec<Predicate<'f, T>>,
    not_clauses: Vec<Predicate<'f, T>>,
    orderings: Vec<OrderBy<'f, T>>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl<T> Default for Criteria<'_, T> {
    fn default() -> Self {
        Criteria {
            and_clauses: Vec::new(),
            or_clauses: Vec::new(),
            not_clauses: Vec::new(),
            orderings: Vec::new(),
            limit: None,
            offset: None,
        }
    }
}

impl<T> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criteria")
            .field("and_clauses", &self.and_clauses.len())
            .field("or_clauses", &self.or_clauses.len())
            .field("not_clauses", &self.not_clauses.len())
            .field("orderings", &self.orderings)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'f, T> Criteria<'f, T> {
    /// Creates empty criteria, which match every element.
    pub fn new() -> Self {
        Criteria::default()
    }

    // ========================================================================
    // Generic clause builders
    // ========================================================================

    /// Adds an AND clause.
    ///
    /// All AND clauses must match for an element to be included.
    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.and_clauses.push(Box::new(predicate));
        self
    }

    /// Adds an OR clause.
    ///
    /// At least one OR clause must match (unless there are no OR clauses).
    pub fn or<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.or_clauses.push(Box::new(predicate));
        self
    }

    /// Adds a NOT clause.
    ///
    /// No NOT clause may match for an element to be included.
    pub fn not<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.not_clauses.push(Box::new(predicate));
        self
    }

    // ========================================================================
    // AND shorthand methods
    // ========================================================================

    /// Adds an AND equality clause.
    pub fn and_eq<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.and(move |item: &T| *item == value)
    }

    /// Adds an AND not-equal clause.
    pub fn and_ne<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.and(move |item: &T| *item != value)
    }

    /// Adds an AND greater-than clause.
    pub fn and_gt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.and(move |item: &T| *item > value)
    }

    /// Adds an AND greater-than-or-equal clause.
    pub fn and_gte<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.and(move |item: &T| *item >= value)
    }

    /// Adds an AND less-than clause.
    pub fn and_lt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.and(move |item: &T| *item < value)
    }

    /// Adds an AND less-than-or-equal clause.
    pub fn and_lte<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.and(move |item: &T| *item <= value)
    }

    // ========================================================================
    // OR shorthand methods
    // ========================================================================

    /// Adds an OR equality clause.
    pub fn or_eq<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.or(move |item: &T| *item == value)
    }

    /// Adds an OR not-equal clause.
    pub fn or_ne<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.or(move |item: &T| *item != value)
    }

    /// Adds an OR greater-than clause.
    pub fn or_gt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.or(move |item: &T| *item > value)
    }

    /// Adds an OR less-than clause.
    pub fn or_lt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.or(move |item: &T| *item < value)
    }

    // ========================================================================
    // NOT shorthand methods
    // ========================================================================

    /// Adds a NOT equality clause.
    pub fn not_eq<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.not(move |item: &T| *item == value)
    }

    /// Adds a NOT not-equal clause.
    pub fn not_ne<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialEq<Q>,
    {
        self.not(move |item: &T| *item != value)
    }

    /// Adds a NOT greater-than clause.
    pub fn not_gt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.not(move |item: &T| *item > value)
    }

    /// Adds a NOT less-than clause.
    pub fn not_lt<Q: 'f>(self, value: Q) -> Self
    where
        T: PartialOrd<Q>,
    {
        self.not(move |item: &T| *item < value)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds an ordering clause using a comparator.
    pub fn order_by<C>(mut self, compare: C, dir: Dir) -> Self
    where
        C: Fn(&T, &T) -> std::cmp::Ordering + 'f,
    {
        self.orderings.push(OrderBy::new(compare, dir));
        self
    }

    /// Adds an ordering clause on a key extracted from each element.
    pub fn order_by_key<K, F>(mut self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'f,
    {
        self.orderings.push(OrderBy::by_key(key, dir));
        self
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Sets the maximum number of results to return.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of results to skip.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Finalizes the criteria.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of clauses in the AND, OR and NOT groups.
    pub fn clause_counts(&self) -> (usize, usize, usize) {
        (
            self.and_clauses.len(),
            self.or_clauses.len(),
            self.not_clauses.len(),
        )
    }

    /// Returns the ordering clauses.
    pub fn orderings(&self) -> &[OrderBy<'f, T>] {
        &self.orderings
    }

    /// Returns the limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the offset, if set.
    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns `true` if there are no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single element matches.
    pub fn matches(&self, item: &T) -> bool {
        if !self.and_clauses.iter().all(|clause| clause(item)) {
            return false;
        }

        let or_pass =
            self.or_clauses.is_empty() || self.or_clauses.iter().any(|clause| clause(item));
        if !or_pass {
            return false;
        }

        !self.not_clauses.iter().any(|clause| clause(item))
    }

    /// Filters a slice, returning references to matching elements.
    ///
    /// Matches keep their input order unless ordering clauses exist, in which
    /// case they are stably sorted. Offset and limit are applied last.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut results = filter_refs(items, |item| self.matches(item));
        let matched = results.len();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings));
        }

        let skip = self.offset.unwrap_or(0).min(results.len());
        if skip > 0 {
            results.drain(..skip);
        }

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        trace!(
            total = items.len(),
            matched,
            returned = results.len(),
            "criteria applied"
        );
        results
    }

    /// Filters and clones matching elements.
    pub fn filter_cloned(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.filter(items).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching elements.
    ///
    /// Note: This does not apply ordering, offset, or limit.
    pub fn retain(&self, items: &mut Vec<T>) {
        items.retain(|item| self.matches(item));
    }

    /// Counts the number of matching elements.
    pub fn count(&self, items: &[T]) -> usize {
        items.iter().filter(|&item| self.matches(item)).count()
    }

    /// Returns `true` if any element matches.
    pub fn any(&self, items: &[T]) -> bool {
        items.iter().any(|item| self.matches(item))
    }

    /// Returns `true` if all elements match.
    pub fn all(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.matches(item))
    }

    /// Finds the first matching element.
    pub fn find<'a>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|&item| self.matches(item))
    }

    /// Finds the first matching element and returns its index.
    pub fn position(&self, items: &[T]) -> Option<usize> {
        items.iter().position(|item| self.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: &'static str,
        priority: i64,
        archived: bool,
    }

    fn task(name: &'static str, priority: i64, archived: bool) -> Task {
        Task {
            name,
            priority,
            archived,
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task("Task A", 1, false),
            task("Task B", 2, false),
            task("Urgent Task", 5, false),
            task("Critical Task", 5, true),
            task("Done Task", 3, true),
        ]
    }

    #[test]
    fn empty_criteria_match_all() {
        let tasks = sample_tasks();
        let criteria = Criteria::new().build();

        assert!(criteria.is_empty());
        assert_eq!(criteria.filter(&tasks).len(), 5);
    }

    #[test]
    fn and_multiple_clauses() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .and(|t: &Task| t.priority == 5)
            .and(|t: &Task| !t.archived)
            .build();

        let results = criteria.filter(&tasks);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Urgent Task");
    }

    #[test]
    fn or_clauses() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .or(|t: &Task| t.name.contains("Urgent"))
            .or(|t: &Task| t.name.contains("Critical"))
            .build();

        assert_eq!(criteria.filter(&tasks).len(), 2);
    }

    #[test]
    fn not_clauses() {
        let tasks = sample_tasks();
        let criteria = Criteria::new().not(|t: &Task| t.archived).build();

        let results = criteria.filter(&tasks);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|t| !t.archived));
    }

    #[test]
    fn combined_and_or_not() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .and(|t: &Task| t.priority >= 3)
            .or(|t: &Task| t.name.contains("Urgent"))
            .or(|t: &Task| t.name.contains("Done"))
            .not(|t: &Task| t.archived)
            .build();

        let results = criteria.filter(&tasks);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Urgent Task");
    }

    #[test]
    fn value_shorthands() {
        let numbers = [1, 2, 3, 4, 5, 6];

        let between = Criteria::new().and_gte(2).and_lt(5).build();
        assert_eq!(between.filter_cloned(&numbers), vec![2, 3, 4]);

        let edges = Criteria::new().or_lt(2).or_gt(5).build();
        assert_eq!(edges.filter_cloned(&numbers), vec![1, 6]);

        let not_three = Criteria::new().and_ne(3).not_eq(4).and_lte(5).build();
        assert_eq!(not_three.filter_cloned(&numbers), vec![1, 2, 5]);

        let only_three = Criteria::new().or_eq(3).not_ne(3).build();
        assert_eq!(only_three.filter_cloned(&numbers), vec![3]);

        let middle = Criteria::new().not_lt(3).not_gt(4).and_eq(3).or_ne(0).build();
        assert_eq!(middle.filter_cloned(&numbers), vec![3]);
    }

    #[test]
    fn ne_against_borrowed_form() {
        let words: Vec<String> = ["One", "Potato", "Two", "Potato"]
            .into_iter()
            .map(String::from)
            .collect();

        let criteria = Criteria::new().and_ne("Potato").build();
        assert_eq!(
            criteria.filter_cloned(&words),
            vec!["One".to_string(), "Two".to_string()]
        );
    }

    #[test]
    fn ordering_single_key() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .order_by_key(|t: &Task| t.priority, Dir::Desc)
            .build();

        let results = criteria.filter(&tasks);
        assert_eq!(results[0].priority, 5);
        assert_eq!(results[1].priority, 5);
        assert_eq!(results[4].priority, 1);
    }

    #[test]
    fn ordering_is_stable_for_ties() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .order_by_key(|t: &Task| t.priority, Dir::Desc)
            .build();

        let results = criteria.filter(&tasks);
        assert_eq!(results[0].name, "Urgent Task");
        assert_eq!(results[1].name, "Critical Task");
    }

    #[test]
    fn ordering_multiple_keys() {
        let tasks = sample_tasks();
        let criteria = Criteria::new()
            .order_by_key(|t: &Task| t.priority, Dir::Desc)
            .order_by(|a: &Task, b: &Task| a.name.cmp(b.name), Dir::Asc)
            .build();

        let results = criteria.filter(&tasks);
        assert_eq!(results[0].name, "Critical Task");
        assert_eq!(results[1].name, "Urgent Task");
        assert_eq!(criteria.orderings().len(), 2);
    }

    #[test]
    fn offset_and_limit() {
        let tasks = sample_tasks();

        assert_eq!(Criteria::new().limit(2).filter(&tasks).len(), 2);
        assert_eq!(Criteria::new().offset(2).filter(&tasks).len(), 3);

        let page = Criteria::new().offset(1).limit(2).build();
        let results = page.filter(&tasks);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Task B");
        assert_eq!(results[1].name, "Urgent Task");
    }

    #[test]
    fn offset_beyond_results() {
        let tasks = sample_tasks();
        assert!(Criteria::new().offset(100).filter(&tasks).is_empty());
    }

    #[test]
    fn count_any_all() {
        let tasks = sample_tasks();
        let archived = Criteria::new().and(|t: &Task| t.archived).build();

        assert_eq!(archived.count(&tasks), 2);
        assert!(archived.any(&tasks));
        assert!(!archived.all(&tasks));

        let named = Criteria::new().and(|t: &Task| t.name.contains("Task")).build();
        assert!(named.all(&tasks));
    }

    #[test]
    fn find_and_position() {
        let tasks = sample_tasks();
        let urgent = Criteria::new().and(|t: &Task| t.name.contains("Urgent")).build();

        assert_eq!(urgent.find(&tasks).map(|t| t.name), Some("Urgent Task"));
        assert_eq!(urgent.position(&tasks), Some(2));

        let missing = Criteria::new().and(|t: &Task| t.name.is_empty()).build();
        assert!(missing.find(&tasks).is_none());
        assert_eq!(missing.position(&tasks), None);
    }

    #[test]
    fn retain_in_place() {
        let mut tasks = sample_tasks();
        Criteria::new().not(|t: &Task| t.archived).retain(&mut tasks);

        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| !t.archived));
    }

    #[test]
    fn introspection() {
        let criteria = Criteria::new()
            .and_eq(1)
            .or_eq(2)
            .not_eq(3)
            .order_by_key(|n: &i32| *n, Dir::Asc)
            .limit(10)
            .offset(5)
            .build();

        assert_eq!(criteria.clause_counts(), (1, 1, 1));
        assert_eq!(criteria.orderings().len(), 1);
        assert_eq!(criteria.get_limit(), Some(10));
        assert_eq!(criteria.get_offset(), Some(5));
        assert!(!criteria.is_empty());
        assert!(format!("{criteria:?}").contains("and_clauses: 1"));
    }
}
