//! The indirection view: traverse the referents of a sequence of
//! dereferenceable elements.

use core::ops::{Deref, DerefMut};

use macros::View;

use crate::caps::{
    Bidirectional, Forward, RandomAccess, Sequence, SequenceMut, SizedSequence, View,
};
use crate::pipe::Adaptor;
use crate::view::all::IntoView;

/// A view whose elements are the referents of the wrapped view's elements.
///
/// `lookup` dereferences twice: once through the position, once through the
/// element. Positions, traversal order and size are the wrapped view's own;
/// only the element type changes, so every traversal capability forwards
/// one-for-one.
///
/// ```
/// use seqview::prelude::*;
///
/// let boxes = [Box::new(4), Box::new(5)];
/// let doubled: Vec<i32> = indirect(&boxes).seq_iter().map(|v| v * 2).collect();
/// assert_eq!(doubled, [8, 10]);
/// ```
#[derive(View, Debug, Default, Clone, Copy)]
pub struct IndirectView<V> {
    base: V,
}

impl<V> IndirectView<V> {
    #[inline]
    pub fn new(base: V) -> Self {
        IndirectView { base }
    }

    #[inline]
    pub fn base(&self) -> &V {
        &self.base
    }

    #[inline]
    pub fn into_base(self) -> V {
        self.base
    }
}

impl<V> Sequence for IndirectView<V>
where
    V: View,
    V::Item: Deref,
{
    type Item = <V::Item as Deref>::Target;
    type Pos = V::Pos;
    type End = V::End;

    #[inline]
    fn first(&self) -> V::Pos {
        self.base.first()
    }

    #[inline]
    fn terminal(&self) -> V::End {
        self.base.terminal()
    }

    #[inline]
    fn lookup(&self, pos: &V::Pos) -> &Self::Item {
        &**self.base.lookup(pos)
    }

    #[inline]
    fn step(&self, pos: &mut V::Pos) {
        self.base.step(pos)
    }

    #[inline]
    fn at_end(&self, pos: &V::Pos, end: &V::End) -> bool {
        self.base.at_end(pos, end)
    }

    #[inline]
    fn bounds(&self, pos: &V::Pos, end: &V::End) -> (usize, Option<usize>) {
        self.base.bounds(pos, end)
    }
}

impl<V> SequenceMut for IndirectView<V>
where
    V: View + SequenceMut,
    V::Item: DerefMut,
{
    #[inline]
    fn lookup_mut(&mut self, pos: &V::Pos) -> &mut Self::Item {
        &mut **self.base.lookup_mut(pos)
    }
}

impl<V> Forward for IndirectView<V>
where
    V: View + Forward,
    V::Item: Deref,
{
}

impl<V> Bidirectional for IndirectView<V>
where
    V: View + Bidirectional,
    V::Item: Deref,
{
    #[inline]
    fn step_back(&self, pos: &mut V::Pos) {
        self.base.step_back(pos)
    }
}

impl<V> RandomAccess for IndirectView<V>
where
    V: View + RandomAccess,
    V::Item: Deref,
{
    #[inline]
    fn jump(&self, pos: &mut V::Pos, n: isize) {
        self.base.jump(pos, n)
    }

    #[inline]
    fn gap(&self, from: &V::Pos, to: &V::Pos) -> isize {
        self.base.gap(from, to)
    }

    #[inline]
    fn gap_to_end(&self, from: &V::Pos, end: &V::End) -> isize {
        self.base.gap_to_end(from, end)
    }
}

impl<V> SizedSequence for IndirectView<V>
where
    V: View + SizedSequence,
    V::Item: Deref,
{
    #[inline]
    fn len(&self) -> usize {
        self.base.len()
    }
}

/// Build an [`IndirectView`] over anything viewable.
#[inline]
pub fn indirect<R>(rng: R) -> IndirectView<R::View>
where
    R: IntoView,
    <R::View as Sequence>::Item: Deref,
{
    IndirectView::new(rng.into_view())
}

/// The pipeline form of [`indirect`]: `rng.pipe(Indirect)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indirect;

impl<R> Adaptor<R> for Indirect
where
    R: IntoView,
    <R::View as Sequence>::Item: Deref,
{
    type Output = IndirectView<R::View>;

    #[inline]
    fn apply(self, rng: R) -> Self::Output {
        indirect(rng)
    }
}
