// sequent/src/pipeline/mod.rs

//! Defines the `Statement<T>` accumulator, its append and execution logic,
//! the type-erased `DynStatement`, and the chaining operator sugar.

pub mod dynamic;
pub mod execution;
pub mod ops;
pub mod statement;

// Re-export the main chain-building surface
pub use dynamic::DynStatement;
pub use ops::Done;
pub use statement::{with, Statement};
