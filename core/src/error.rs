// sequent/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequentError {
  #[error("A type shape must describe at least one type")]
  EmptyShape,

  #[error("Shape slice out of bounds: start {start}, length {length}, but shape size is {size}")]
  SliceOutOfBounds {
    start: usize,
    length: usize,
    size: usize,
  },

  #[error("Chain shape mismatch at position {position}: step expects '{expected}' but the chain produces '{found}'")]
  ShapeMismatch {
    position: usize,
    expected: &'static str,
    found: &'static str,
  },

  #[error("Final value type mismatch: requested '{expected}' but the chain produces '{found}'")]
  TypeMismatch {
    expected: &'static str,
    found: &'static str,
  },

  #[error("Step at position {position} failed. Source: {source}")]
  StepFailure {
    position: usize,
    #[source]
    source: AnyhowError,
  },

  #[error("Internal sequent error: {0}")]
  Internal(String),
}

pub type SequentResult<T, E = SequentError> = std::result::Result<T, E>;
