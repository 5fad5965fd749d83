// sequent/src/core/shape.rs

//! `TypeShape`: the ordered, read-only record of a chain's type shape.
//!
//! The first tag is the seed value's type; every queued step contributes
//! its output type after that. The shape carries no values, only metadata.
//! The dynamic layer checks step compatibility against it eagerly at
//! append time, and errors and log events pull their type names from it.

use crate::core::signature::TypeTag;
use crate::error::{SequentError, SequentResult};

/// An ordered, non-empty sequence of type tags.
///
/// Invariant: holds at least one tag. `new` rejects empty input, and
/// nothing ever removes tags, so `front`/`back` are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShape {
  tags: Vec<TypeTag>,
}

impl TypeShape {
  /// Builds a shape from an explicit tag list. Rejects an empty list.
  pub fn new(tags: Vec<TypeTag>) -> SequentResult<Self> {
    if tags.is_empty() {
      return Err(SequentError::EmptyShape);
    }
    Ok(TypeShape { tags })
  }

  /// The single-element shape of a freshly wrapped seed value.
  pub fn seed<T: 'static>() -> Self {
    TypeShape {
      tags: vec![TypeTag::of::<T>()],
    }
  }

  pub fn len(&self) -> usize {
    self.tags.len()
  }

  /// Always false; kept for API completeness alongside `len`.
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn front(&self) -> &TypeTag {
    // Non-empty invariant.
    &self.tags[0]
  }

  pub fn back(&self) -> &TypeTag {
    &self.tags[self.tags.len() - 1]
  }

  pub fn get(&self, n: usize) -> Option<&TypeTag> {
    self.tags.get(n)
  }

  /// A new shape over a contiguous sub-range.
  ///
  /// Bounds are inclusive of the final element: requires `length >= 1`
  /// and `start + length <= len()`, so a slice may run through the back
  /// of the shape.
  pub fn slice(&self, start: usize, length: usize) -> SequentResult<TypeShape> {
    if length == 0 || start >= self.tags.len() || start + length > self.tags.len() {
      return Err(SequentError::SliceOutOfBounds {
        start,
        length,
        size: self.tags.len(),
      });
    }
    Ok(TypeShape {
      tags: self.tags[start..start + length].to_vec(),
    })
  }

  /// Records one more produced type at the back of the shape.
  pub(crate) fn push(&mut self, tag: TypeTag) {
    self.tags.push(tag);
  }
}
