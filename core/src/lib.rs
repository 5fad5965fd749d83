// src/lib.rs

//! Sequent: a synchronous, type-safe pipeline-composition engine for Rust.
//!
//! Sequent lets you build a sequential chain of heterogeneous
//! transformation steps (each a unary function that may change the
//! value's type) and execute them in order against a starting value:
//!  - `with(x)` wraps a starting value into a `Statement`.
//!  - `then` / `then_try` queue steps without applying them; consecutive
//!    steps are type-checked at append time, by the compiler.
//!  - `run()` drains the queue as a strict left fold and yields the final
//!    value; a zero-step chain yields the seed unchanged.
//!  - `with(x) | step | step | Done` is the operator spelling of the same.
//!  - `DynStatement` + `BoxedStep` cover chains assembled at runtime, with
//!    eager shape checks against the recorded `TypeShape`.

// Declare modules according to the planned structure
pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

// The chain-building surface users interact with most
pub use crate::pipeline::dynamic::DynStatement;
pub use crate::pipeline::ops::Done;
pub use crate::pipeline::statement::{with, Statement};

// Introspection and shape bookkeeping
pub use crate::core::shape::TypeShape;
pub use crate::core::signature::{signature_of, Signature, TypeTag, UnaryStep};
pub use crate::core::step::BoxedStep;

pub use crate::error::{SequentError, SequentResult};

/*
    Core Workflow:
    1. Start a chain with `with(value)`.
    2. Append transformation steps with `.then(|v| ...)` (or `|` sugar);
       each step's input type must match the previous step's output type.
    3. Finish with `.run()` (or `| Done`) to fold the steps, in order,
       into one final value.
    4. For steps only known at runtime, box them with `BoxedStep::new` and
       assemble a `DynStatement`; incompatible steps are rejected at append.
*/
