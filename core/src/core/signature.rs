// sequent/src/core/signature.rs

//! The callable introspector: runtime type descriptors (`TypeTag`,
//! `Signature`) and the `UnaryStep<In>` trait that derives them from any
//! unary callable.
//!
//! The blanket impl over `FnOnce(In) -> Out` uniformly covers free
//! functions, fn pointers and references, capturing and non-capturing
//! closures, and bound method paths (`T::method`). A callable whose call
//! signature is ambiguous (implements `FnOnce` for more than one argument
//! type) fails trait resolution at compile time, before it can participate
//! in any chain.

use std::any::TypeId;
use std::fmt;

/// Runtime descriptor of a single Rust type: its `TypeId` plus the
/// human-readable name used in diagnostics and log events.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
  id: TypeId,
  name: &'static str,
}

impl TypeTag {
  pub fn of<T: 'static>() -> Self {
    TypeTag {
      id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
    }
  }

  pub fn id(&self) -> TypeId {
    self.id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }
}

// Equality is by TypeId only; names are informational. Two instantiations
// of the same type always compare equal even across codegen units.
impl PartialEq for TypeTag {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// The input/output type pair a unary callable exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
  pub input: TypeTag,
  pub output: TypeTag,
}

impl Signature {
  pub fn of<In: 'static, Out: 'static>() -> Self {
    Signature {
      input: TypeTag::of::<In>(),
      output: TypeTag::of::<Out>(),
    }
  }
}

impl fmt::Display for Signature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.input, self.output)
  }
}

/// A unary transformation step: consumes one `In`, produces one `Output`.
///
/// Implemented for every `FnOnce(In) -> Out`. The trait exists so the
/// engine can name a callable's output type (`Self::Output`) and recover
/// its `Signature` without the caller spelling either out.
pub trait UnaryStep<In: 'static> {
  type Output: 'static;

  fn invoke(self, input: In) -> Self::Output;

  fn signature() -> Signature
  where
    Self: Sized,
  {
    Signature::of::<In, Self::Output>()
  }
}

impl<In, Out, F> UnaryStep<In> for F
where
  In: 'static,
  Out: 'static,
  F: FnOnce(In) -> Out,
{
  type Output = Out;

  fn invoke(self, input: In) -> Out {
    self(input)
  }
}

/// Derives the `Signature` of any unary callable by inference.
pub fn signature_of<In, F>(_step: &F) -> Signature
where
  In: 'static,
  F: UnaryStep<In>,
{
  F::signature()
}
