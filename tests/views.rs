//! View construction, the IntoView deduction rule and pipeline form.

mod common;

use common::FwdSeq;
use seqview::prelude::*;
use seqview::seq_size;

#[test]
fn ref_view_borrows_and_copies() {
    let data = [1, 2, 3];
    let view = all(&data);

    let a: Vec<i32> = view.seq_iter().copied().collect();
    // RefView is Copy: handing it off leaves the original usable.
    let copy = view;
    let b: Vec<i32> = copy.seq_iter().copied().collect();
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(seq_size!(view), 3);
}

#[test]
fn mut_view_writes_through() {
    let mut data = vec![1, 2, 3];
    let mut view = all(&mut data);

    let end = view.sentinel();
    let mut cur = view.cursor_mut();
    while !cur.at_end(&end) {
        *cur.read_mut() += 100;
        cur.next();
    }
    assert_eq!(data, [101, 102, 103]);
}

#[test]
fn views_pass_through_into_view_unchanged() {
    let data = [5, 6];
    let view = all(&data);

    // A view is its own view form; rewrapping is the identity.
    let again = all(view);
    let items: Vec<i32> = again.seq_iter().copied().collect();
    assert_eq!(items, [5, 6]);
}

/// A view that drops the first element of its base, deriving its marker
/// and identity conversion.
#[derive(View, Clone, Copy)]
struct Skip1<V> {
    base: V,
}

impl<V: View> Sequence for Skip1<V> {
    type Item = V::Item;
    type Pos = V::Pos;
    type End = V::End;

    fn first(&self) -> V::Pos {
        let mut pos = self.base.first();
        self.base.step(&mut pos);
        pos
    }

    fn terminal(&self) -> V::End {
        self.base.terminal()
    }

    fn lookup(&self, pos: &V::Pos) -> &V::Item {
        self.base.lookup(pos)
    }

    fn step(&self, pos: &mut V::Pos) {
        self.base.step(pos)
    }

    fn at_end(&self, pos: &V::Pos, end: &V::End) -> bool {
        self.base.at_end(pos, end)
    }
}

#[test]
fn derived_views_join_the_deduction_rule() {
    let data = [1, 2, 3];
    let skipped = Skip1 { base: all(&data) };

    let items: Vec<i32> = skipped.seq_iter().copied().collect();
    assert_eq!(items, [2, 3]);

    // The derive provides the identity IntoView impl.
    let same = all(skipped);
    let items: Vec<i32> = same.seq_iter().copied().collect();
    assert_eq!(items, [2, 3]);
}

#[test]
fn forward_only_sources_still_view() {
    let seq = FwdSeq::new(vec![4, 5, 6]);
    let view = all(&seq);

    let items: Vec<i32> = view.seq_iter().copied().collect();
    assert_eq!(items, [4, 5, 6]);

    // Replay is allowed at the forward tier.
    let it = view.seq_iter();
    let replay: Vec<i32> = it.clone().copied().collect();
    assert_eq!(replay, items);
}
