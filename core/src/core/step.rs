// sequent/src/core/step.rs

//! `BoxedStep`: the type-erased, apply-exactly-once representation of a
//! queued transformation step.
//!
//! A step is captured together with the `Signature` the introspector
//! derives for it. The erased closure moves values as `Box<dyn Any + Send>`;
//! the recorded signature is what makes that safe: the typed statement
//! threads types at compile time, and the dynamic statement checks the
//! signature against the chain's shape before a step is ever queued.

use crate::core::signature::{Signature, TypeTag};
use crate::error::{SequentError, SequentResult};
use std::any::Any;

/// A value moving through an erased chain.
pub(crate) type AnyValue = Box<dyn Any + Send>;

// Failure modes of one erased application. The executor adds the step's
// position when converting to SequentError.
pub(crate) enum ApplyError {
  /// The incoming value was not of the step's declared input type. The
  /// shape checks make this unreachable; surfaced as `Internal`.
  InputDowncast { expected: &'static str },
  /// A fallible step's own failure.
  Failure(anyhow::Error),
}

type ErasedFn = Box<dyn FnOnce(AnyValue) -> Result<AnyValue, ApplyError> + Send>;

/// A single queued step: an erased unary closure plus its signature.
///
/// Owned by exactly one statement, applied at most once, never shared.
pub struct BoxedStep {
  apply: ErasedFn,
  signature: Signature,
}

impl BoxedStep {
  /// Boxes an infallible unary step.
  pub fn new<In, Out, F>(step: F) -> Self
  where
    In: Send + 'static,
    Out: Send + 'static,
    F: FnOnce(In) -> Out + Send + 'static,
  {
    let signature = Signature::of::<In, Out>();
    let apply: ErasedFn = Box::new(move |value: AnyValue| {
      let input = value.downcast::<In>().map_err(|_| ApplyError::InputDowncast {
        expected: signature.input.name(),
      })?;
      Ok(Box::new(step(*input)) as AnyValue)
    });
    BoxedStep { apply, signature }
  }

  /// Boxes a fallible unary step. The error is recorded as the chain
  /// failure's source, unchanged.
  pub fn try_new<In, Out, F, E>(step: F) -> Self
  where
    In: Send + 'static,
    Out: Send + 'static,
    F: FnOnce(In) -> Result<Out, E> + Send + 'static,
    E: Into<anyhow::Error>,
  {
    let signature = Signature::of::<In, Out>();
    let apply: ErasedFn = Box::new(move |value: AnyValue| {
      let input = value.downcast::<In>().map_err(|_| ApplyError::InputDowncast {
        expected: signature.input.name(),
      })?;
      match step(*input) {
        Ok(output) => Ok(Box::new(output) as AnyValue),
        Err(e) => Err(ApplyError::Failure(e.into())),
      }
    });
    BoxedStep { apply, signature }
  }

  pub fn signature(&self) -> &Signature {
    &self.signature
  }

  pub fn input(&self) -> &TypeTag {
    &self.signature.input
  }

  pub fn output(&self) -> &TypeTag {
    &self.signature.output
  }

  /// Applies the step to an erased value. `position` is the step's index
  /// in the chain, used for error reporting only.
  pub(crate) fn apply(self, value: AnyValue, position: usize) -> SequentResult<AnyValue> {
    (self.apply)(value).map_err(|e| match e {
      ApplyError::InputDowncast { expected } => SequentError::Internal(format!(
        "erased value at position {} did not downcast to '{}' despite shape check",
        position, expected
      )),
      ApplyError::Failure(source) => SequentError::StepFailure { position, source },
    })
  }
}

impl std::fmt::Debug for BoxedStep {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BoxedStep").field("signature", &self.signature).finish()
  }
}
