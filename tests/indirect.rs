//! The indirection view over real pointer-element sequences.

mod common;

use common::FwdBoxes;
use seqview::prelude::*;
use seqview::seq_size;

fn boxes() -> Vec<Box<i32>> {
    vec![Box::new(10), Box::new(20), Box::new(30)]
}

#[test]
fn elements_are_the_referents() {
    let boxes = boxes();
    let view = indirect(&boxes);

    let values: Vec<i32> = view.seq_iter().copied().collect();
    assert_eq!(values, [10, 20, 30]);
}

#[test]
fn traversal_capabilities_carry_over() {
    let boxes = boxes();
    let view = indirect(&boxes);

    assert_eq!(seq_size!(view), 3);

    let mut it = view.seq_iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.size_hint(), (3, Some(3)));
    assert_eq!(it.next_back(), Some(&30));
    assert_eq!(it.len(), 2);

    let reversed: Vec<i32> = view.seq_iter().rev().copied().collect();
    assert_eq!(reversed, [30, 20, 10]);

    let mut cur = view.cursor();
    cur.advance(2);
    assert_eq!(*cur.read(), 30);
    assert_eq!(cur.distance_to_end(&view.sentinel()), 1);
}

#[test]
fn mutation_reaches_the_referents() {
    let mut boxes = boxes();
    let mut view = indirect(&mut boxes);

    let end = view.sentinel();
    let mut cur = view.cursor_mut();
    while !cur.at_end(&end) {
        *cur.read_mut() += 1;
        cur.next();
    }

    assert_eq!(*boxes[0], 11);
    assert_eq!(*boxes[1], 21);
    assert_eq!(*boxes[2], 31);
}

#[test]
fn pipeline_and_free_function_agree() {
    let boxes = boxes();

    let piped: Vec<i32> = (&boxes).pipe(Indirect).seq_iter().copied().collect();
    let direct: Vec<i32> = indirect(&boxes).seq_iter().copied().collect();
    assert_eq!(piped, direct);
}

#[test]
fn indirection_stacks() {
    let nested = vec![Box::new(Box::new(1)), Box::new(Box::new(2))];

    let once = indirect(&nested);
    let twice = indirect(once);
    let values: Vec<i32> = twice.seq_iter().copied().collect();
    assert_eq!(values, [1, 2]);
}

#[test]
fn forward_only_sources_indirect_without_extras() {
    let seq = FwdBoxes::new(vec![Box::new(7), Box::new(8)]);
    let view = indirect(&seq);

    let values: Vec<i32> = view.seq_iter().copied().collect();
    assert_eq!(values, [7, 8]);

    // Replayable, because the source is forward.
    let it = view.seq_iter();
    let replay: Vec<i32> = it.clone().copied().collect();
    assert_eq!(replay, values);
}
