//! Traversal capability traits.
//!
//! A capability is a compile-time fact about a sequence type: how it can be
//! traversed, whether its size is known up front, whether its begin and end
//! positions share a type. The traversal capabilities form a strict ladder
//! enforced by supertraits:
//!
//! ```text
//! Sequence (single-pass)  <-  Forward  <-  Bidirectional  <-  RandomAccess
//! ```
//!
//! so declaring a stronger tier without the weaker ones does not compile.
//! Wrappers (see the `view` module) forward each capability only when the
//! wrapped type has it: capabilities narrow, never widen, across a layer.
//!
//! Capability reports must be truthful. An impl whose operations disagree
//! with the tier it claims (a `RandomAccess` whose `jump` is not equivalent
//! to repeated `step`/`step_back`) makes traversal undefined behavior; that
//! is a bug in the impl, not a runtime condition this crate detects.

/// A sequence: a beginning position, an end marker, and position-driven
/// element access. This baseline is single-pass — `Pos` is not required to
/// be cloneable or comparable.
///
/// Stepping a position past the end, or looking up a position at or past
/// the end, is undefined behavior. The built-in sources guard both with
/// `debug_assert!`, compiled out in release builds.
pub trait Sequence {
    /// Element type. What `lookup` dereferences to.
    type Item: ?Sized;
    /// Position within the sequence.
    type Pos;
    /// End marker. Equal to `Pos` for common sequences, distinct otherwise.
    type End;

    /// The position of the first element.
    fn first(&self) -> Self::Pos;

    /// The end marker for a full traversal.
    fn terminal(&self) -> Self::End;

    /// Access the element at `pos`.
    fn lookup(&self, pos: &Self::Pos) -> &Self::Item;

    /// Advance `pos` by one element.
    fn step(&self, pos: &mut Self::Pos);

    /// Whether `pos` has reached `end`.
    fn at_end(&self, pos: &Self::Pos, end: &Self::End) -> bool;

    /// Bounds on the number of elements from `pos` to `end`, in
    /// `Iterator::size_hint` form. The default knows nothing.
    ///
    /// A sequence that knows the remaining count must report it exactly;
    /// wrappers forward the wrapped sequence's answer.
    fn bounds(&self, _pos: &Self::Pos, _end: &Self::End) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Mutable element access, independent of traversal strength.
pub trait SequenceMut: Sequence {
    /// Access the element at `pos` for writing.
    fn lookup_mut(&mut self, pos: &Self::Pos) -> &mut Self::Item;
}

/// Forward (multi-pass) traversal: positions can be saved, revisited and
/// compared, so a traversal can be replayed from any remembered point.
pub trait Forward: Sequence<Pos: Clone + PartialEq> {}

/// Bidirectional traversal.
pub trait Bidirectional: Forward {
    /// Move `pos` back by one element. Undefined behavior before the
    /// beginning.
    fn step_back(&self, pos: &mut Self::Pos);
}

/// Random-access traversal: O(1) jumps and signed distances.
///
/// A random-access sequence knows every remaining count, so its
/// `Sequence::bounds` must be overridden to the exact value; the iterator
/// layer's `ExactSizeIterator` claim relies on that the same way traversal
/// relies on a truthful `jump`.
pub trait RandomAccess: Bidirectional {
    /// Move `pos` by `n` elements (`n` may be negative). Must agree with
    /// `n` repeated `step`/`step_back` calls.
    fn jump(&self, pos: &mut Self::Pos, n: isize);

    /// Steps from `from` to `to`; negative if `to` precedes `from`.
    fn gap(&self, from: &Self::Pos, to: &Self::Pos) -> isize;

    /// Steps from `from` to the end marker.
    fn gap_to_end(&self, from: &Self::Pos, end: &Self::End) -> isize;
}

/// O(1) known size.
pub trait SizedSequence: Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence whose begin and end positions share a type, enabling
/// two-cursor traversal. Never implemented by hand: derived structurally
/// from `End = Pos` by the blanket impl below.
pub trait CommonSequence: Sequence {
    /// The end marker, viewed as a position.
    fn end_pos(&self) -> Self::Pos;
}

impl<S> CommonSequence for S
where
    S: Sequence<End = <S as Sequence>::Pos> + ?Sized,
{
    #[inline]
    fn end_pos(&self) -> Self::Pos {
        self.terminal()
    }
}

/// Marker for sequences with lightweight-handle value semantics: O(1)
/// copy/move, destruction independent of the source, no deep storage of
/// elements. A view borrows or owns at most a handle; it must not outlive
/// a source it merely borrows — the borrow checker enforces that for the
/// built-in views.
///
/// Usually derived via `#[derive(View)]`, which also provides the identity
/// `IntoView` impl.
pub trait View: Sequence {}
