//! Error types for the fallible transforms.

use std::fmt;

use thiserror::Error;

/// The transform that produced a [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Map,
    Filter,
    Reduce,
}

impl Stage {
    /// Returns the display name of this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Map => "map",
            Stage::Filter => "filter",
            Stage::Reduce => "reduce",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A caller-supplied function failed partway through a transform.
///
/// The traversal stops at the first failure, so `index` is also the number
/// of elements that were processed successfully before it.
#[derive(Debug, Error)]
#[error("{stage} aborted at element {index}")]
pub struct TransformError<E> {
    /// Which transform was running.
    pub stage: Stage,
    /// Position of the element whose callback failed.
    pub index: usize,
    /// The error returned by the callback.
    #[source]
    pub source: E,
}

impl<E> TransformError<E> {
    /// Creates a new error for the element at `index`.
    pub fn new(stage: Stage, index: usize, source: E) -> Self {
        TransformError {
            stage,
            index,
            source,
        }
    }

    /// Discards the position information and returns the callback's error.
    pub fn into_source(self) -> E {
        self.source
    }
}

/// Result type for fallible transforms.
pub type TransformResult<T, E> = std::result::Result<T, TransformError<E>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Map.to_string(), "map");
        assert_eq!(Stage::Filter.to_string(), "filter");
        assert_eq!(Stage::Reduce.to_string(), "reduce");
    }

    #[test]
    fn display_names_stage_and_index() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = TransformError::new(Stage::Map, 3, source);
        assert_eq!(err.to_string(), "map aborted at element 3");
    }

    #[test]
    fn source_is_callback_error() {
        let source = "x".parse::<i32>().unwrap_err();
        let expected = source.to_string();
        let err = TransformError::new(Stage::Reduce, 0, source);

        assert_eq!(err.source().map(|e| e.to_string()), Some(expected));
        assert_eq!(err.into_source(), "x".parse::<i32>().unwrap_err());
    }
}
