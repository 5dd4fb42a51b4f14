//! # Layer 3b: Iterator synthesis
//!
//! [`SeqIter`] bridges a sequence into the std iterator world. Every std
//! tier is a blanket impl gated on the sequence's capabilities, so the
//! iterator's abilities are derived structurally and never declared:
//!
//! | std trait              | required capability                    |
//! |------------------------|----------------------------------------|
//! | `Iterator`             | `Sequence` (single-pass baseline)      |
//! | `FusedIterator`        | `Sequence` (end is re-checked per step)|
//! | `Clone`                | clonable position and end marker       |
//! | `DoubleEndedIterator`  | `Bidirectional` over a common sequence |
//! | `ExactSizeIterator`    | `RandomAccess`                         |
//!
//! `size_hint` delegates to `Sequence::bounds`, so hints are exact
//! wherever the source knows its remaining count and the know-nothing
//! default everywhere else.
//!
//! The iterator yields element borrows with the source borrow's lifetime.
//! There is no mutable counterpart: under `prev` a by-`&mut` iterator could
//! hand out two live borrows of one element, so exclusive traversal stays
//! on [`CursorMut`](crate::cursor::CursorMut), whose element borrows are
//! scoped to each call.

use core::iter::FusedIterator;

use crate::caps::{Bidirectional, RandomAccess, Sequence};

/// A std-style iterator over a borrowed sequence.
///
/// Built by [`SequenceExt::seq_iter`](crate::cursor::SequenceExt::seq_iter);
/// holds the borrow, a front position and the end marker. For common
/// bidirectional sequences the end marker doubles as the back position, so
/// `next_back` walks it inwards.
pub struct SeqIter<'s, S: Sequence + ?Sized> {
    seq: &'s S,
    pos: S::Pos,
    end: S::End,
}

impl<'s, S: Sequence + ?Sized> SeqIter<'s, S> {
    #[inline]
    pub fn new(seq: &'s S) -> Self {
        SeqIter {
            seq,
            pos: seq.first(),
            end: seq.terminal(),
        }
    }
}

impl<'s, S: Sequence + ?Sized> Iterator for SeqIter<'s, S> {
    type Item = &'s S::Item;

    #[inline]
    fn next(&mut self) -> Option<&'s S::Item> {
        if self.seq.at_end(&self.pos, &self.end) {
            return None;
        }
        let item = self.seq.lookup(&self.pos);
        self.seq.step(&mut self.pos);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.bounds(&self.pos, &self.end)
    }
}

// Once at_end holds neither position moves again, so None is sticky.
impl<S: Sequence + ?Sized> FusedIterator for SeqIter<'_, S> {}

// A clonable iterator is a replayable traversal: exactly the forward tier.
impl<S: Sequence + ?Sized> Clone for SeqIter<'_, S>
where
    S::Pos: Clone,
    S::End: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        SeqIter {
            seq: self.seq,
            pos: self.pos.clone(),
            end: self.end.clone(),
        }
    }
}

impl<'s, S> DoubleEndedIterator for SeqIter<'s, S>
where
    S: Bidirectional + Sequence<End = <S as Sequence>::Pos> + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<&'s S::Item> {
        if self.seq.at_end(&self.pos, &self.end) {
            return None;
        }
        self.seq.step_back(&mut self.end);
        Some(self.seq.lookup(&self.end))
    }
}

// size_hint is exact here: RandomAccess requires exact bounds.
impl<S: RandomAccess + ?Sized> ExactSizeIterator for SeqIter<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        let gap = self.seq.gap_to_end(&self.pos, &self.end);
        debug_assert!(gap >= 0, "front position passed the end");
        gap as usize
    }
}
