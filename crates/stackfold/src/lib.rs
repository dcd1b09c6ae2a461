//! Stackfold - a generic LIFO stack and map/filter/reduce over slices.
//!
//! The crate has two independent halves:
//!
//! - [`Stack`], a growable last-in-first-out container with an
//!   equality-based [`Stack::contains`], plus the [`Lifo`] trait so generic
//!   code can treat `Stack` and `Vec` alike
//! - [`map`], [`filter`] and [`reduce`], which transform or fold a borrowed
//!   slice with a caller-supplied function
//!
//! Nothing here fails on an empty input. An empty pop yields `None`, and an
//! empty slice maps or filters to an empty `Vec` and reduces to its initial
//! value. Only the `try_` transforms return errors, and only when the caller's
//! function does.
//!
//! # Quick Start
//!
//! ```rust
//! use stackfold::{filter, map, reduce, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! stack.push(30);
//! assert_eq!(stack.pop(), Some(30));
//! assert!(stack.contains(&10));
//! assert!(!stack.contains(&5));
//!
//! let words = ["One", "Potato", "Two", "Potato"];
//! let kept = filter(&words, |w| *w != "Potato");
//! assert_eq!(kept, vec!["One", "Two"]);
//!
//! let lengths = map(&kept, |w| w.len());
//! assert_eq!(lengths, vec![3, 3]);
//!
//! let total = reduce(&lengths, 0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//! ```
//!
//! # Building predicates
//!
//! [`Criteria`] assembles a filter predicate from AND / OR / NOT clause
//! groups, with optional ordering and paging:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous. A `Stack` shared between threads needs an
//! external lock; none is provided here.

mod criteria;
mod error;
mod ordering;
mod stack;
mod traits;
mod transform;

// Re-export public API
pub use criteria::Criteria;
pub use error::{Stage, TransformError, TransformResult};
pub use ordering::{compare_by_orderings, Dir, OrderBy};
pub use stack::Stack;
pub use traits::{unwind, Lifo};
pub use transform::{filter, filter_refs, map, reduce, try_filter, try_map, try_reduce};
