// sequent/src/pipeline/dynamic.rs

//! `DynStatement`: the type-erased counterpart of `Statement<T>`, for
//! chains assembled at runtime from pre-boxed steps (step catalogues,
//! configuration-driven chains) where the compiler cannot thread types.
//!
//! Compatibility is still enforced eagerly at append: a `BoxedStep` whose
//! declared input tag does not match the chain's current output tag is
//! rejected with `ShapeMismatch` before it is ever queued, so a dynamic
//! chain that assembled successfully cannot fail a shape check during
//! execution.

use crate::core::shape::TypeShape;
use crate::core::step::{AnyValue, BoxedStep};
use crate::error::{SequentError, SequentResult};
use crate::pipeline::execution::drain;
use crate::pipeline::statement::Statement;
use std::any::Any;
use tracing::{event, instrument, Level};

/// A chain under construction whose output type is known only as a
/// runtime tag. Same ownership rules as `Statement<T>`: built once,
/// consumed once, every append yields a new independent value.
pub struct DynStatement {
  seed: AnyValue,
  queue: Vec<BoxedStep>,
  shape: TypeShape,
}

impl DynStatement {
  /// Wraps a starting value into a dynamic statement with an empty queue.
  pub fn with<T: Send + 'static>(value: T) -> Self {
    DynStatement {
      seed: Box::new(value),
      queue: Vec::new(),
      shape: TypeShape::seed::<T>(),
    }
  }

  /// Appends a pre-boxed step, checking its input tag against the chain's
  /// current output tag. A mismatch is rejected here, at append time, and
  /// the statement is consumed either way.
  pub fn append(mut self, step: BoxedStep) -> SequentResult<Self> {
    let produced = self.shape.back();
    if step.input() != produced {
      event!(
        Level::WARN,
        position = self.queue.len(),
        expected = %step.input(),
        found = %produced,
        "Rejecting incompatible step."
      );
      return Err(SequentError::ShapeMismatch {
        position: self.queue.len(),
        expected: step.input().name(),
        found: produced.name(),
      });
    }
    event!(Level::TRACE, position = self.queue.len(), signature = %step.signature(), "Appending boxed step.");
    let output = *step.output();
    self.queue.push(step);
    self.shape.push(output);
    Ok(self)
  }

  /// Number of steps queued and not yet applied.
  pub fn queued(&self) -> usize {
    self.queue.len()
  }

  /// The chain's recorded type shape.
  pub fn shape(&self) -> &TypeShape {
    &self.shape
  }

  /// Executes the chain and yields the final value, still erased.
  #[instrument(
        name = "DynStatement::run_boxed",
        skip_all,
        fields(
            output_type = %self.shape.back(),
            queued_steps = self.queue.len(),
        ),
        err(Display)
    )]
  pub fn run_boxed(self) -> SequentResult<Box<dyn Any + Send>> {
    event!(Level::DEBUG, "Dynamic chain execution starting.");
    drain(self.seed, self.queue)
  }

  /// Executes the chain and downcasts the final value to `T`.
  ///
  /// Fails with `TypeMismatch` when `T` is not the type the chain's last
  /// step produces (or the seed's type for an empty queue).
  pub fn run_as<T: Send + 'static>(self) -> SequentResult<T> {
    let produced = self.shape.back().name();
    let value = self.run_boxed()?;
    match value.downcast::<T>() {
      Ok(final_value) => Ok(*final_value),
      Err(_) => Err(SequentError::TypeMismatch {
        expected: std::any::type_name::<T>(),
        found: produced,
      }),
    }
  }
}

impl std::fmt::Debug for DynStatement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DynStatement")
      .field("queued", &self.queue.len())
      .field("shape", &self.shape)
      .finish()
  }
}

impl<T: Send + 'static> Statement<T> {
  /// Drops the compile-time output type, keeping seed, queue, and shape.
  pub fn into_dyn(self) -> DynStatement {
    DynStatement {
      seed: self.seed,
      queue: self.queue,
      shape: self.shape,
    }
  }
}
