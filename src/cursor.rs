//! # Layer 3a: Cursors
//!
//! A cursor is one borrow of a sequence plus one position; a sentinel is a
//! bare end marker. Which methods a cursor has follows the capabilities of
//! the borrowed sequence: `prev` exists only for `Bidirectional` sequences,
//! `advance` and the distance queries only for `RandomAccess`, and
//! `CursorMut::read_mut` only for `SequenceMut`. There is no runtime check
//! behind any of this; an unsupported method is simply not there.
//!
//! Cursors from different traversals must not be mixed: comparing or
//! measuring against a cursor over another sequence is undefined behavior
//! (debug-asserted here by sequence identity).

use crate::caps::{Bidirectional, RandomAccess, Sequence, SequenceMut};
use crate::iter::SeqIter;

/// An end marker, detached from any position type.
///
/// For common sequences the inner value doubles as a position; for
/// single-pass sources it may be an opaque condition instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel<E> {
    end: E,
}

impl<E> Sentinel<E> {
    #[inline]
    pub fn new(end: E) -> Self {
        Sentinel { end }
    }

    #[inline]
    pub fn get(&self) -> &E {
        &self.end
    }

    #[inline]
    pub fn into_inner(self) -> E {
        self.end
    }
}

/// A shared-borrow traversal handle: a `&S` plus a `S::Pos`.
///
/// `read` hands out element borrows with the *sequence* borrow's lifetime,
/// so elements read through a cursor outlive the cursor itself.
pub struct Cursor<'s, S: Sequence + ?Sized> {
    seq: &'s S,
    pos: S::Pos,
}

impl<'s, S: Sequence + ?Sized> Cursor<'s, S> {
    #[inline]
    pub fn new(seq: &'s S, pos: S::Pos) -> Self {
        Cursor { seq, pos }
    }

    /// The element under the cursor. Undefined behavior at the end.
    #[inline]
    pub fn read(&self) -> &'s S::Item {
        self.seq.lookup(&self.pos)
    }

    /// Step one element forward. Undefined behavior past the end.
    #[inline]
    pub fn next(&mut self) {
        self.seq.step(&mut self.pos);
    }

    /// Whether the cursor has reached `sentinel`.
    #[inline]
    pub fn at_end(&self, sentinel: &Sentinel<S::End>) -> bool {
        self.seq.at_end(&self.pos, sentinel.get())
    }

    #[inline]
    pub fn pos(&self) -> &S::Pos {
        &self.pos
    }

    #[inline]
    pub fn into_pos(self) -> S::Pos {
        self.pos
    }
}

impl<S: Sequence + ?Sized> Cursor<'_, S>
where
    S::Pos: PartialEq,
{
    /// Whether both cursors sit on the same position of one traversal.
    #[inline]
    pub fn equal(&self, other: &Self) -> bool {
        debug_assert!(
            core::ptr::eq(self.seq, other.seq),
            "cursors from different sequences"
        );
        self.pos == other.pos
    }
}

impl<S: Bidirectional + ?Sized> Cursor<'_, S> {
    /// Step one element back. Undefined behavior before the beginning.
    #[inline]
    pub fn prev(&mut self) {
        self.seq.step_back(&mut self.pos);
    }
}

impl<S: RandomAccess + ?Sized> Cursor<'_, S> {
    /// Move by `n` elements, negative for backwards.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.seq.jump(&mut self.pos, n);
    }

    /// Steps from `self` to `other`; negative if `other` precedes `self`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            core::ptr::eq(self.seq, other.seq),
            "cursors from different sequences"
        );
        self.seq.gap(&self.pos, &other.pos)
    }

    /// Steps from `self` to `sentinel`.
    #[inline]
    pub fn distance_to_end(&self, sentinel: &Sentinel<S::End>) -> isize {
        self.seq.gap_to_end(&self.pos, sentinel.get())
    }
}

// Derives would demand S: Clone; the cursor only needs its position cloned.
impl<S: Sequence + ?Sized> Clone for Cursor<'_, S>
where
    S::Pos: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Cursor {
            seq: self.seq,
            pos: self.pos.clone(),
        }
    }
}

impl<S: Sequence + ?Sized> PartialEq for Cursor<'_, S>
where
    S::Pos: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<S: RandomAccess + ?Sized> PartialOrd for Cursor<'_, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        // gap > 0 means other lies ahead of self.
        Some(0isize.cmp(&self.distance_to(other)))
    }
}

/// An exclusive-borrow traversal handle.
///
/// `read_mut` borrows are scoped to the call (a reborrow of the handle),
/// never to the sequence borrow: two live element borrows through one
/// `CursorMut` cannot exist, which is what makes mutable traversal sound
/// even for bidirectional sequences.
pub struct CursorMut<'s, S: Sequence + ?Sized> {
    seq: &'s mut S,
    pos: S::Pos,
}

impl<'s, S: Sequence + ?Sized> CursorMut<'s, S> {
    #[inline]
    pub fn new(seq: &'s mut S, pos: S::Pos) -> Self {
        CursorMut { seq, pos }
    }

    /// The element under the cursor. Undefined behavior at the end.
    #[inline]
    pub fn read(&self) -> &S::Item {
        self.seq.lookup(&self.pos)
    }

    /// Step one element forward. Undefined behavior past the end.
    #[inline]
    pub fn next(&mut self) {
        self.seq.step(&mut self.pos);
    }

    /// Whether the cursor has reached `sentinel`.
    #[inline]
    pub fn at_end(&self, sentinel: &Sentinel<S::End>) -> bool {
        self.seq.at_end(&self.pos, sentinel.get())
    }

    #[inline]
    pub fn pos(&self) -> &S::Pos {
        &self.pos
    }
}

impl<S: SequenceMut + ?Sized> CursorMut<'_, S> {
    /// The element under the cursor, for writing. Undefined behavior at
    /// the end.
    #[inline]
    pub fn read_mut(&mut self) -> &mut S::Item {
        self.seq.lookup_mut(&self.pos)
    }
}

impl<S: Bidirectional + ?Sized> CursorMut<'_, S> {
    /// Step one element back. Undefined behavior before the beginning.
    #[inline]
    pub fn prev(&mut self) {
        self.seq.step_back(&mut self.pos);
    }
}

impl<S: RandomAccess + ?Sized> CursorMut<'_, S> {
    /// Move by `n` elements, negative for backwards.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.seq.jump(&mut self.pos, n);
    }
}

/// Traversal entry points, blanket-provided for every sequence.
pub trait SequenceExt: Sequence {
    /// A cursor at the first element.
    #[inline]
    fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.first())
    }

    /// The end marker, wrapped for cursor queries.
    #[inline]
    fn sentinel(&self) -> Sentinel<Self::End> {
        Sentinel::new(self.terminal())
    }

    /// A cursor at the end. Common sequences only; the result has the same
    /// type as `cursor`, enabling two-cursor traversal.
    #[inline]
    fn end_cursor(&self) -> Cursor<'_, Self>
    where
        Self: Sequence<End = <Self as Sequence>::Pos>,
    {
        Cursor::new(self, self.terminal())
    }

    /// Iterate over element borrows; see [`SeqIter`] for the tiers the
    /// iterator picks up from `Self`.
    #[inline]
    fn seq_iter(&self) -> SeqIter<'_, Self> {
        SeqIter::new(self)
    }

    /// An exclusive cursor at the first element.
    #[inline]
    fn cursor_mut(&mut self) -> CursorMut<'_, Self> {
        let pos = self.first();
        CursorMut::new(self, pos)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
