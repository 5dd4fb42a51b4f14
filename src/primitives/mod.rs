//! # Layer 0: Primitives
//!
//! Type-level booleans, the bridge between `const` capability probes and
//! type selection. Everything above builds on these.

pub mod bool;

pub use bool::{Absent, Bool, BoolNot, CapResult, If, Present, SelectBool};
