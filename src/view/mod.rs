//! # Layer 4: Views
//!
//! A view wraps a sequence without copying elements and forwards each
//! capability exactly when the wrapped type has it, so capabilities narrow
//! and never widen across a wrapping layer.
//!
//! - [`RefView`] / [`MutView`]: every sequence becomes a view by borrowing
//!   it; [`IntoView`] is the deduction rule (`&S` → `RefView`, `&mut S` →
//!   `MutView`, a view passes through unchanged).
//! - [`IndirectView`]: traverses the referents of a sequence of
//!   dereferenceable elements.

mod all;
mod indirect;

pub use all::{all, IntoView, MutView, RefView};
pub use indirect::{indirect, Indirect, IndirectView};
