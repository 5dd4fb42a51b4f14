//! The all-sequences-become-views adaptors and the `IntoView` deduction
//! rule.

use macros::View;

use crate::caps::{
    Bidirectional, Forward, RandomAccess, Sequence, SequenceMut, SizedSequence, View,
};

/// Deduce the view form of a value.
///
/// `&S` and `&mut S` wrap into [`RefView`] / [`MutView`]; a type that is
/// already a view is its own view form (the identity impl is generated by
/// `#[derive(View)]`). Adaptor constructors take `impl IntoView`, so they
/// accept plain sequences and views alike without double-wrapping.
pub trait IntoView {
    type View: View;

    fn into_view(self) -> Self::View;
}

impl<'a, S: Sequence + ?Sized> IntoView for &'a S {
    type View = RefView<'a, S>;

    #[inline]
    fn into_view(self) -> RefView<'a, S> {
        RefView(self)
    }
}

impl<'a, S: Sequence + ?Sized> IntoView for &'a mut S {
    type View = MutView<'a, S>;

    #[inline]
    fn into_view(self) -> MutView<'a, S> {
        MutView(self)
    }
}

/// View a sequence by value, reference or view, per the [`IntoView`]
/// deduction rule.
#[inline]
pub fn all<R: IntoView>(rng: R) -> R::View {
    rng.into_view()
}

/// A shared borrow of a sequence, as a view.
///
/// Forwards every capability of `S` except mutation.
#[derive(View)]
pub struct RefView<'a, S: ?Sized>(&'a S);

impl<'a, S: ?Sized> RefView<'a, S> {
    #[inline]
    pub fn new(seq: &'a S) -> Self {
        RefView(seq)
    }

    #[inline]
    pub fn get(&self) -> &'a S {
        self.0
    }
}

// A derive would demand S: Clone; the view is a borrow either way.
impl<S: ?Sized> Clone for RefView<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for RefView<'_, S> {}

impl<S: Sequence + ?Sized> Sequence for RefView<'_, S> {
    type Item = S::Item;
    type Pos = S::Pos;
    type End = S::End;

    #[inline]
    fn first(&self) -> S::Pos {
        self.0.first()
    }

    #[inline]
    fn terminal(&self) -> S::End {
        self.0.terminal()
    }

    #[inline]
    fn lookup(&self, pos: &S::Pos) -> &S::Item {
        self.0.lookup(pos)
    }

    #[inline]
    fn step(&self, pos: &mut S::Pos) {
        self.0.step(pos)
    }

    #[inline]
    fn at_end(&self, pos: &S::Pos, end: &S::End) -> bool {
        self.0.at_end(pos, end)
    }

    #[inline]
    fn bounds(&self, pos: &S::Pos, end: &S::End) -> (usize, Option<usize>) {
        self.0.bounds(pos, end)
    }
}

impl<S: Forward + ?Sized> Forward for RefView<'_, S> {}

impl<S: Bidirectional + ?Sized> Bidirectional for RefView<'_, S> {
    #[inline]
    fn step_back(&self, pos: &mut S::Pos) {
        self.0.step_back(pos)
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for RefView<'_, S> {
    #[inline]
    fn jump(&self, pos: &mut S::Pos, n: isize) {
        self.0.jump(pos, n)
    }

    #[inline]
    fn gap(&self, from: &S::Pos, to: &S::Pos) -> isize {
        self.0.gap(from, to)
    }

    #[inline]
    fn gap_to_end(&self, from: &S::Pos, end: &S::End) -> isize {
        self.0.gap_to_end(from, end)
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for RefView<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An exclusive borrow of a sequence, as a view.
///
/// The only built-in view that forwards `SequenceMut`.
#[derive(View)]
pub struct MutView<'a, S: ?Sized>(&'a mut S);

impl<'a, S: ?Sized> MutView<'a, S> {
    #[inline]
    pub fn new(seq: &'a mut S) -> Self {
        MutView(seq)
    }

    #[inline]
    pub fn get(&self) -> &S {
        self.0
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut S {
        self.0
    }
}

impl<S: Sequence + ?Sized> Sequence for MutView<'_, S> {
    type Item = S::Item;
    type Pos = S::Pos;
    type End = S::End;

    #[inline]
    fn first(&self) -> S::Pos {
        self.0.first()
    }

    #[inline]
    fn terminal(&self) -> S::End {
        self.0.terminal()
    }

    #[inline]
    fn lookup(&self, pos: &S::Pos) -> &S::Item {
        self.0.lookup(pos)
    }

    #[inline]
    fn step(&self, pos: &mut S::Pos) {
        self.0.step(pos)
    }

    #[inline]
    fn at_end(&self, pos: &S::Pos, end: &S::End) -> bool {
        self.0.at_end(pos, end)
    }

    #[inline]
    fn bounds(&self, pos: &S::Pos, end: &S::End) -> (usize, Option<usize>) {
        self.0.bounds(pos, end)
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for MutView<'_, S> {
    #[inline]
    fn lookup_mut(&mut self, pos: &S::Pos) -> &mut S::Item {
        self.0.lookup_mut(pos)
    }
}

impl<S: Forward + ?Sized> Forward for MutView<'_, S> {}

impl<S: Bidirectional + ?Sized> Bidirectional for MutView<'_, S> {
    #[inline]
    fn step_back(&self, pos: &mut S::Pos) {
        self.0.step_back(pos)
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for MutView<'_, S> {
    #[inline]
    fn jump(&self, pos: &mut S::Pos, n: isize) {
        self.0.jump(pos, n)
    }

    #[inline]
    fn gap(&self, from: &S::Pos, to: &S::Pos) -> isize {
        self.0.gap(from, to)
    }

    #[inline]
    fn gap_to_end(&self, from: &S::Pos, end: &S::End) -> isize {
        self.0.gap_to_end(from, end)
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for MutView<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}
