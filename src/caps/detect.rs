//! Structural capability detection for concrete types.
//!
//! A probe for capability `C` is two sources for one constant: a hidden
//! fallback trait whose `IS_C` is `false` for every `Caps<T>`, and an
//! inherent `IS_C = true` on `Caps<T>` only where `T: C`. Inherent items
//! shadow trait items, so `Caps::<Concrete>::IS_C` reads `true` exactly
//! when the bound holds and falls through to the trait's `false` otherwise,
//! on stable Rust and without negative reasoning.
//!
//! `has_cap!` builds the same probe inline for an arbitrary trait, so the
//! synthesized iterator tiers (`DoubleEndedIterator`, `ExactSizeIterator`,
//! ...) can be asked about with the same syntax as this crate's own
//! capability traits.
//!
//! Probing needs the concrete type at the call site. Inside a generic fn
//! the inherent-vs-trait choice is not revisited per instantiation, so
//! generic code states capability requirements as ordinary trait bounds
//! instead.

use core::marker::PhantomData;

use paste::paste;

use super::traverse::{Bidirectional, Forward, RandomAccess, SequenceMut, SizedSequence};

/// Capability probe for `T`; carries one detection const per capability.
pub struct Caps<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a capability trait.
macro_rules! impl_cap_probe {
    ($Cap:ident) => {
        paste! {
            #[doc(hidden)]
            pub trait [<$Cap Fallback>] {
                const [<IS_ $Cap:snake:upper>]: bool = false;
            }
            impl<T: ?Sized> [<$Cap Fallback>] for Caps<T> {}
            impl<T: ?Sized + $Cap> Caps<T> {
                pub const [<IS_ $Cap:snake:upper>]: bool = true;
            }
        }
    };
}

impl_cap_probe!(Forward);
impl_cap_probe!(Bidirectional);
impl_cap_probe!(RandomAccess);
impl_cap_probe!(SizedSequence);
impl_cap_probe!(SequenceMut);

/// Check whether a concrete type has a capability, at compile time.
///
/// The capability may be any trait in scope, so synthesized iterator tiers
/// can be probed the same way. Small boolean expressions are supported:
/// `&` (and), `|` (or) and a leading `!` per term, evaluated left to right.
///
/// ```
/// use seqview::has_cap;
/// use seqview::prelude::*;
///
/// assert!(has_cap!([i32]: RandomAccess));
/// assert!(has_cap!([i32]: Bidirectional & SequenceMut));
/// assert!(!has_cap!([i32]: !SizedSequence));
/// ```
///
/// Only works for concrete types; in generic code use trait bounds.
#[macro_export]
macro_rules! has_cap {
    ($T:ty: ! $Cap:ident $(:: $CapSeg:ident)* & $($rest:tt)+) => {
        !$crate::__cap_probe!($T, $Cap $(:: $CapSeg)*) && $crate::has_cap!($T: $($rest)+)
    };
    ($T:ty: $Cap:ident $(:: $CapSeg:ident)* & $($rest:tt)+) => {
        $crate::__cap_probe!($T, $Cap $(:: $CapSeg)*) && $crate::has_cap!($T: $($rest)+)
    };
    ($T:ty: ! $Cap:ident $(:: $CapSeg:ident)* | $($rest:tt)+) => {
        !$crate::__cap_probe!($T, $Cap $(:: $CapSeg)*) || $crate::has_cap!($T: $($rest)+)
    };
    ($T:ty: $Cap:ident $(:: $CapSeg:ident)* | $($rest:tt)+) => {
        $crate::__cap_probe!($T, $Cap $(:: $CapSeg)*) || $crate::has_cap!($T: $($rest)+)
    };
    ($T:ty: ! $Cap:ident $(:: $CapSeg:ident)*) => {
        !$crate::__cap_probe!($T, $Cap $(:: $CapSeg)*)
    };
    ($T:ty: $Cap:ident $(:: $CapSeg:ident)*) => {
        $crate::__cap_probe!($T, $Cap $(:: $CapSeg)*)
    };
}

/// Internal probe - DO NOT USE DIRECTLY. Use `has_cap!` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __cap_probe {
    ($T:ty, $Cap:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Cap> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        <__Probe<$T>>::VAL
    }};
}

/// Inline compile-time branch on a capability of a concrete type.
///
/// The probe result is lifted into type space (`CapResult`) and the arm is
/// picked by `Bool::If`, so selection is pure type normalization with no
/// value-level branch. Both arms must have the same type; only the
/// selected arm runs.
///
/// ```
/// use seqview::cap_dispatch;
/// use seqview::prelude::*;
///
/// let strategy = cap_dispatch!([i32]: RandomAccess, {
///     Present => "jump",
///     Absent => "walk",
/// });
/// assert_eq!(strategy, "jump");
/// ```
#[macro_export]
macro_rules! cap_dispatch {
    ($T:ty: $Cap:ident, {
        Present => $present:expr,
        Absent => $absent:expr $(,)?
    }) => {{
        struct __OnPresent;
        struct __OnAbsent;

        trait __Arm<R> {
            fn __run(present: impl FnOnce() -> R, absent: impl FnOnce() -> R) -> R;
        }

        impl<R> __Arm<R> for __OnPresent {
            #[inline]
            fn __run(present: impl FnOnce() -> R, _absent: impl FnOnce() -> R) -> R {
                present()
            }
        }

        impl<R> __Arm<R> for __OnAbsent {
            #[inline]
            fn __run(_present: impl FnOnce() -> R, absent: impl FnOnce() -> R) -> R {
                absent()
            }
        }

        type __Chosen = <$crate::CapResult<{ $crate::has_cap!($T: $Cap) }> as $crate::Bool>::If<
            __OnPresent,
            __OnAbsent,
        >;
        <__Chosen as __Arm<_>>::__run(|| $present, || $absent)
    }};
}
