//! Dispatch points for begin/end/size and their customization traits.
//!
//! Rank traits share one method name per operation but are implemented at
//! distinct reference depths; the resolution macros call through a fixed
//! number of references, so method probing visits the ranks in a fixed
//! order and stops at the first applicable one.
//!
//! Customization traits are meant for the sequence *value* type. A
//! customization on a reference type is never consulted: reference
//! arguments resolve at the fallback ranks.

use crate::caps::{RandomAccess, Sequence, SizedSequence};

// =============================================================================
// Customization traits (rank 1)
// =============================================================================

/// Customize where traversal of a type starts.
///
/// When present, `seq_begin!` returns this instead of `Sequence::first`.
pub trait CustomBegin: Sequence {
    fn custom_begin(&self) -> Self::Pos;
}

/// Customize where traversal of a type ends.
pub trait CustomEnd: Sequence {
    fn custom_end(&self) -> Self::End;
}

/// Customize the reported size of a type.
pub trait CustomSize: Sequence {
    fn custom_size(&self) -> usize;
}

// =============================================================================
// begin
// =============================================================================

#[doc(hidden)]
pub trait BeginRank1 {
    type Pos;
    fn __seq_begin(&self) -> Self::Pos;
}

impl<S: CustomBegin + ?Sized> BeginRank1 for &S {
    type Pos = <S as Sequence>::Pos;

    #[inline]
    fn __seq_begin(&self) -> Self::Pos {
        (**self).custom_begin()
    }
}

#[doc(hidden)]
pub trait BeginRank2 {
    type Pos;
    fn __seq_begin(&self) -> Self::Pos;
}

impl<S: Sequence + ?Sized> BeginRank2 for &&S {
    type Pos = <S as Sequence>::Pos;

    #[inline]
    fn __seq_begin(&self) -> Self::Pos {
        (***self).first()
    }
}

/// Resolve the beginning position of a sequence through the dispatch ranks.
///
/// ```
/// use seqview::seq_begin;
///
/// let data = [1, 2, 3];
/// assert_eq!(seq_begin!(data), 0);
/// ```
#[macro_export]
macro_rules! seq_begin {
    ($seq:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{BeginRank1 as _, BeginRank2 as _};
        (&&$seq).__seq_begin()
    }};
}

// =============================================================================
// end
// =============================================================================

#[doc(hidden)]
pub trait EndRank1 {
    type End;
    fn __seq_end(&self) -> Self::End;
}

impl<S: CustomEnd + ?Sized> EndRank1 for &S {
    type End = <S as Sequence>::End;

    #[inline]
    fn __seq_end(&self) -> Self::End {
        (**self).custom_end()
    }
}

#[doc(hidden)]
pub trait EndRank2 {
    type End;
    fn __seq_end(&self) -> Self::End;
}

impl<S: Sequence + ?Sized> EndRank2 for &&S {
    type End = <S as Sequence>::End;

    #[inline]
    fn __seq_end(&self) -> Self::End {
        (***self).terminal()
    }
}

/// Resolve the end marker of a sequence through the dispatch ranks.
#[macro_export]
macro_rules! seq_end {
    ($seq:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{EndRank1 as _, EndRank2 as _};
        (&&$seq).__seq_end()
    }};
}

// =============================================================================
// size
// =============================================================================

#[doc(hidden)]
pub trait SizeRank1 {
    fn __seq_size(&self) -> usize;
}

impl<S: CustomSize + ?Sized> SizeRank1 for &S {
    #[inline]
    fn __seq_size(&self) -> usize {
        (**self).custom_size()
    }
}

#[doc(hidden)]
pub trait SizeRank2 {
    fn __seq_size(&self) -> usize;
}

impl<S: SizedSequence + ?Sized> SizeRank2 for &&S {
    #[inline]
    fn __seq_size(&self) -> usize {
        (***self).len()
    }
}

#[doc(hidden)]
pub trait SizeRank3 {
    fn __seq_size(&self) -> usize;
}

impl<S: ?Sized> SizeRank3 for S
where
    S: RandomAccess + Sequence<End = <S as Sequence>::Pos>,
{
    #[inline]
    fn __seq_size(&self) -> usize {
        let first = self.first();
        let gap = self.gap(&first, &self.terminal());
        debug_assert!(gap >= 0, "negative gap between begin and end");
        gap as usize
    }
}

/// Resolve the size of a sequence through the dispatch ranks: a `CustomSize`
/// impl, then `SizedSequence::len`, then a distance computed via
/// `RandomAccess` over a common sequence.
///
/// A sequence supporting none of the three has no size; asking for one is
/// rejected at compile time:
///
/// ```compile_fail
/// use seqview::{seq_size, Sequence};
///
/// struct Chars(&'static str);
///
/// impl Sequence for Chars {
///     type Item = u8;
///     type Pos = usize;
///     type End = usize;
///     fn first(&self) -> usize { 0 }
///     fn terminal(&self) -> usize { self.0.len() }
///     fn lookup(&self, pos: &usize) -> &u8 { &self.0.as_bytes()[*pos] }
///     fn step(&self, pos: &mut usize) { *pos += 1 }
///     fn at_end(&self, pos: &usize, end: &usize) -> bool { pos >= end }
/// }
///
/// let _ = seq_size!(Chars("abc")); // no viable rank: ill-formed
/// ```
#[macro_export]
macro_rules! seq_size {
    ($seq:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{SizeRank1 as _, SizeRank2 as _, SizeRank3 as _};
        (&&$seq).__seq_size()
    }};
}
