//! The [`Lifo`] trait over push/pop containers.
//!
//! Generic code written against [`Lifo`] works with both [`Stack`] and a
//! plain [`Vec`] used as a stack.
//!
//! [`Stack`]: crate::Stack

use crate::stack::Stack;

/// A container whose elements are added and removed at one end.
///
/// # Examples
///
/// ```rust
/// use stackfold::{Lifo, Stack};
///
/// fn load<L: Lifo<i32>>(lifo: &mut L) {
///     lifo.push(1);
///     lifo.push(2);
/// }
///
/// let mut stack = Stack::new();
/// load(&mut stack);
/// assert_eq!(Lifo::peek(&stack), Some(&2));
///
/// let mut vec = Vec::new();
/// load(&mut vec);
/// assert_eq!(Lifo::pop(&mut vec), Some(2));
/// ```
pub trait Lifo<T> {
    /// Adds an element as the new top.
    fn push(&mut self, item: T);

    /// Removes and returns the top element, or `None` if the container is
    /// empty.
    fn pop(&mut self) -> Option<T>;

    /// All elements, bottom first.
    fn as_slice(&self) -> &[T];

    /// The top element, if any.
    fn peek(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Number of stored elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if any stored element equals `item`.
    fn contains<Q>(&self, item: &Q) -> bool
    where
        Q: ?Sized,
        T: PartialEq<Q>,
    {
        self.as_slice().iter().any(|stored| stored == item)
    }
}

impl<T> Lifo<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

/// `Vec` as a stack: the end of the vector is the top.
impl<T> Lifo<T> for Vec<T> {
    fn push(&mut self, item: T) {
        self.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

/// Pops every element off `lifo`, returning them in pop order (top first).
pub fn unwind<T, L>(lifo: &mut L) -> Vec<T>
where
    L: Lifo<T> + ?Sized,
{
    let mut popped = Vec::with_capacity(lifo.len());
    while let Some(item) = lifo.pop() {
        popped.push(item);
    }
    popped
}
