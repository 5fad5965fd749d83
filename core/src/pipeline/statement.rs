// sequent/src/pipeline/statement.rs

//! Contains the `Statement<T>` struct definition, the `with` entry point,
//! and the append operations (`then`, `then_try`).
//!
//! `Statement<T>` is the accumulator of a chain under construction: one
//! seed value, an ordered queue of not-yet-applied steps, and the recorded
//! type shape. The parameter `T` is the type the chain will produce once
//! executed: the seed's type while the queue is empty, then the output
//! type of the last appended step. Because `then` requires
//! `F: FnOnce(T) -> U`, consecutive steps are checked for compatibility at
//! append time, by the compiler, before the chain can run.

use crate::core::shape::TypeShape;
use crate::core::signature::TypeTag;
use crate::core::step::{AnyValue, BoxedStep};
use std::marker::PhantomData;
use tracing::{event, Level};

/// A chain under construction: a seed value plus a queue of pending steps.
///
/// Built once, consumed once: appending and executing both take `self` by
/// value, so every append yields a new, independent statement and in-place
/// mutation is unobservable by construction.
pub struct Statement<T> {
  pub(crate) seed: AnyValue,
  pub(crate) queue: Vec<BoxedStep>,
  pub(crate) shape: TypeShape,
  _output: PhantomData<fn() -> T>,
}

/// Wraps a starting value into a statement with an empty step queue.
///
/// This is the only entry point for building a chain.
pub fn with<T: Send + 'static>(value: T) -> Statement<T> {
  event!(Level::TRACE, seed_type = %std::any::type_name::<T>(), "Wrapping seed value into a new statement.");
  Statement {
    seed: Box::new(value),
    queue: Vec::new(),
    shape: TypeShape::seed::<T>(),
    _output: PhantomData,
  }
}

impl<T: Send + 'static> Statement<T> {
  // All append paths funnel through here; an empty and a non-empty queue
  // are the same operation.
  fn push<U: 'static>(mut self, step: BoxedStep) -> Statement<U> {
    self.queue.push(step);
    self.shape.push(TypeTag::of::<U>());
    Statement {
      seed: self.seed,
      queue: self.queue,
      shape: self.shape,
      _output: PhantomData,
    }
  }

  /// Appends a step to the chain without applying it.
  ///
  /// The step's input type must be the chain's current output type `T`;
  /// anything else is a compile error. Returns a new statement whose
  /// output type is the step's return type.
  pub fn then<U, F>(self, step: F) -> Statement<U>
  where
    U: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
  {
    event!(
      Level::TRACE,
      position = self.queue.len(),
      step_signature = %format!("{} -> {}", std::any::type_name::<T>(), std::any::type_name::<U>()),
      "Appending step."
    );
    self.push::<U>(BoxedStep::new(step))
  }

  /// Appends a fallible step. On execution, its error aborts the fold and
  /// surfaces as `SequentError::StepFailure` with the step's position.
  pub fn then_try<U, F, E>(self, step: F) -> Statement<U>
  where
    U: Send + 'static,
    F: FnOnce(T) -> Result<U, E> + Send + 'static,
    E: Into<anyhow::Error>,
  {
    event!(
      Level::TRACE,
      position = self.queue.len(),
      step_signature = %format!("{} -> {}", std::any::type_name::<T>(), std::any::type_name::<U>()),
      "Appending fallible step."
    );
    self.push::<U>(BoxedStep::try_new(step))
  }

  /// Number of steps queued and not yet applied.
  pub fn queued(&self) -> usize {
    self.queue.len()
  }

  /// The chain's recorded type shape: seed type first, then one entry per
  /// queued step's output type.
  pub fn shape(&self) -> &TypeShape {
    &self.shape
  }
}

impl<T> std::fmt::Debug for Statement<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Statement")
      .field("queued", &self.queue.len())
      .field("shape", &self.shape)
      .finish()
  }
}
