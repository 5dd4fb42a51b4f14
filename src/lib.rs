#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables Vec/Box sequence sources in no_std

//! # seqview
//!
//! Lazy, composable sequence views whose operation set is decided entirely
//! at compile time from the capabilities of the underlying sequence.
//!
//! A *sequence* is anything with a beginning position and an end marker. A
//! *view* wraps a sequence without copying its elements. Which operations a
//! view offers — stepping backwards, jumping, asking for a size, comparing
//! begin and end as the same type — is never declared; it is re-derived from
//! the wrapped type wherever it is needed, so capabilities narrow and never
//! widen across a wrapping layer, and unsupported operations simply do not
//! exist for a type rather than failing at runtime.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present/Absent), If/And/Or, SelectBool        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability model                                        |
//! |  - Sequence, SequenceMut, Forward, Bidirectional, RandomAccess    |
//! |  - SizedSequence, CommonSequence, View                            |
//! |  - Caps<T> probe, has_cap!, cap_dispatch!                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Tiered dispatch                                         |
//! |  - CustomBegin/CustomEnd/CustomSize customization traits          |
//! |  - seq_begin!/seq_end!/seq_size! ranked resolution                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Cursors & iterator synthesis                            |
//! |  - Cursor, CursorMut, Sentinel                                    |
//! |  - SeqIter: std iterator tiers derived structurally               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Views                                                   |
//! |  - RefView/MutView + IntoView (all sequences become views)        |
//! |  - IndirectView (double dereference), Pipe/Adaptor composition    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick start
//!
//! ```
//! use seqview::prelude::*;
//!
//! let boxes = vec![Box::new(10), Box::new(20), Box::new(30)];
//!
//! // A view over the referents of a sequence of boxes.
//! let view = indirect(&boxes);
//! let values: Vec<i32> = view.seq_iter().copied().collect();
//! assert_eq!(values, [10, 20, 30]);
//!
//! // The source is random-access and sized, so the view is too.
//! assert_eq!(seqview::seq_size!(view), 3);
//! let reversed: Vec<i32> = view.seq_iter().rev().copied().collect();
//! assert_eq!(reversed, [30, 20, 10]);
//! ```
//!
//! There is no runtime error path anywhere in this crate: an operation a
//! type cannot support is a missing method or an unsatisfied bound, caught
//! when the caller compiles. The only runtime-observable misuses (stepping
//! past the end, comparing cursors from unrelated traversals) are undefined
//! behavior, guarded by `debug_assert!` in the built-in sources.

// Allow `::seqview` to work inside the crate itself
extern crate self as seqview;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability model
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Tiered dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 3: Cursors & iterator synthesis
// =============================================================================
pub mod cursor;
pub mod iter;

// =============================================================================
// Layer 4: Views
// =============================================================================
pub mod pipe;
pub mod view;

// Built-in sequence sources (slices, arrays, Vec, boxed slices)
pub mod sources;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use caps::{
    Bidirectional, Caps, CommonSequence, Forward, RandomAccess, Sequence, SequenceMut,
    SizedSequence, View,
};
pub use cursor::{Cursor, CursorMut, Sentinel, SequenceExt};
pub use dispatch::{CustomBegin, CustomEnd, CustomSize};
pub use iter::SeqIter;
pub use pipe::{Adaptor, Pipe};
pub use primitives::bool::{Absent, Bool, BoolNot, CapResult, If, Present, SelectBool};
pub use view::{all, indirect, Indirect, IndirectView, IntoView, MutView, RefView};

// Re-export the derive; it lives in the macro namespace, next to the trait.
pub use macros::View;

/// Common items for building and consuming views.
pub mod prelude {
    pub use crate::caps::{
        Bidirectional, CommonSequence, Forward, RandomAccess, Sequence, SequenceMut,
        SizedSequence, View,
    };
    pub use crate::cursor::{Cursor, CursorMut, Sentinel, SequenceExt};
    pub use crate::pipe::{Adaptor, Pipe};
    pub use crate::view::{all, indirect, Indirect, IndirectView, IntoView, MutView, RefView};
    pub use macros::View;
    // Note: has_cap!, cap_dispatch!, seq_begin!, seq_end!, seq_size! are
    // #[macro_export] so they're at crate root.
}
