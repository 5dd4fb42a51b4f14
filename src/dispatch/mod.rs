//! # Layer 2: Tiered dispatch
//!
//! Fixed dispatch points for the free-standing sequence operations
//! (`seq_begin!`, `seq_end!`, `seq_size!`), each resolved through an
//! explicit rank ordering:
//!
//! 1. the argument type's own customization (`CustomBegin` / `CustomEnd` /
//!    `CustomSize`),
//! 2. the structural fallback (the `Sequence` / `SizedSequence` impl),
//! 3. for `seq_size!` only, a size derived from `RandomAccess` distances
//!    over a common sequence.
//!
//! The first viable rank wins; viability is a compile-time yes/no, and a
//! type for which no rank is viable makes the call ill-formed rather than
//! failing at runtime. Ranks live at distinct autoref depths of the
//! receiver's method probe, so two ranks can never tie.
//!
//! The macros are the only supported entry points: the rank traits are
//! hidden, cannot be shadowed through the argument type's own scope, and
//! there is no dispatch object to copy or reassign.
//!
//! Like the detection layer, resolution needs the concrete type at the call
//! site. Generic code takes the capability trait as a bound and calls its
//! methods directly — that is the same tier-2 behavior, fixed at the bound.

pub mod ops;

pub use ops::{
    BeginRank1, BeginRank2, CustomBegin, CustomEnd, CustomSize, EndRank1, EndRank2, SizeRank1,
    SizeRank2, SizeRank3,
};
