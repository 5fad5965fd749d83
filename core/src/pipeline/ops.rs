// sequent/src/pipeline/ops.rs

//! Infix chaining sugar: `with(x) | step | step | Done`.
//!
//! `|` with a unary callable on the right appends (`Statement::then`);
//! `|` with the `Done` sentinel executes (`Statement::run`). Dispatch is
//! by operand type alone, so the two forms cannot be confused: `Done` is
//! a dedicated unit struct and everything else must satisfy `FnOnce`.
//! The method calls remain the primary API; this module only adds the
//! operator spelling on top of them.

use crate::error::SequentResult;
use crate::pipeline::statement::Statement;
use std::ops::BitOr;

/// The terminal marker: a stateless sentinel that, when chained, triggers
/// execution instead of appending another step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Done;

impl<T, U, F> BitOr<F> for Statement<T>
where
  T: Send + 'static,
  U: Send + 'static,
  F: FnOnce(T) -> U + Send + 'static,
{
  type Output = Statement<U>;

  fn bitor(self, step: F) -> Statement<U> {
    self.then(step)
  }
}

impl<T: Send + 'static> BitOr<Done> for Statement<T> {
  type Output = SequentResult<T>;

  fn bitor(self, _done: Done) -> SequentResult<T> {
    self.run()
  }
}
