//! # Layer 1: Capability model
//!
//! Compile-time facts about sequence types.
//!
//! - **Traits**: the traversal ladder (`Sequence` → `Forward` →
//!   `Bidirectional` → `RandomAccess`) plus `SequenceMut`, `SizedSequence`,
//!   `CommonSequence` and the `View` marker.
//! - **Detection**: `Caps<T>` probe consts and the `has_cap!` /
//!   `cap_dispatch!` macros for concrete types.

pub mod detect;
pub mod traverse;

pub use detect::{
    BidirectionalFallback, Caps, ForwardFallback, RandomAccessFallback, SequenceMutFallback,
    SizedSequenceFallback,
};
pub use traverse::{
    Bidirectional, CommonSequence, Forward, RandomAccess, Sequence, SequenceMut, SizedSequence,
    View,
};
