pub mod shape;
pub mod signature;
pub mod step;

// Re-export key types for easier access from other sequent modules (and lib.rs)
pub use shape::TypeShape;
pub use signature::{signature_of, Signature, TypeTag, UnaryStep};
pub use step::BoxedStep;
