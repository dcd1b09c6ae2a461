//! Growable LIFO stack.
//!
//! [`Stack`] keeps its elements in insertion order; the last element pushed
//! is the top and is the first one returned by [`Stack::pop`].

use tracing::trace;

/// A last-in-first-out container.
///
/// Popping an empty stack is not an error: [`Stack::pop`] returns `None` and
/// leaves the stack untouched.
///
/// # Examples
///
/// ```rust
/// use stackfold::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(10);
/// stack.push(20);
/// stack.push(30);
///
/// assert_eq!(stack.pop(), Some(30));
/// assert!(stack.contains(&10));
/// assert!(!stack.contains(&5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `value` as the new top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackfold::Stack;
    ///
    /// let mut stack: Stack<u32> = Stack::new();
    /// assert_eq!(stack.pop(), None);
    ///
    /// stack.push(42);
    /// assert_eq!(stack.pop(), Some(42));
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let top = self.items.pop();
        if top.is_none() {
            trace!("pop on empty stack");
        }
        top
    }

    /// Pops the top element, reporting absence with a flag instead of an
    /// `Option`.
    ///
    /// Returns `(top, true)`, or `(T::default(), false)` when the stack is
    /// empty.
    ///
    /// ```rust
    /// use stackfold::Stack;
    ///
    /// let mut stack = Stack::from(vec![7]);
    /// assert_eq!(stack.pop_or_default(), (7, true));
    /// assert_eq!(stack.pop_or_default(), (0, false));
    /// ```
    pub fn pop_or_default(&mut self) -> (T, bool)
    where
        T: Default,
    {
        match self.pop() {
            Some(top) => (top, true),
            None => (T::default(), false),
        }
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top element.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns `true` if any stored element equals `value`.
    ///
    /// This is a linear scan from the bottom of the stack.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: PartialEq<Q>,
    {
        self.items.iter().any(|item| item == value)
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Elements in insertion order; the last element is the top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the stack, returning its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Pops every element, top first.
    ///
    /// The stack is empty once the iterator is dropped, even if it was not
    /// fully consumed.
    ///
    /// ```rust
    /// use stackfold::Stack;
    ///
    /// let mut stack: Stack<_> = [1, 2, 3].into_iter().collect();
    /// let popped: Vec<_> = stack.drain().collect();
    /// assert_eq!(popped, vec![3, 2, 1]);
    /// assert!(stack.is_empty());
    /// ```
    pub fn drain(&mut self) -> std::iter::Rev<std::vec::Drain<'_, T>> {
        self.items.drain(..).rev()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of `items` becomes the top.
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
