//! Synthetic sequences pinned to exact capability tiers.
//!
//! Slices are random-access and common; these types deliberately are not,
//! so tests can observe what each tier adds.
#![allow(dead_code)]

use seqview::{Bidirectional, Forward, Sequence};

/// Single-pass source: position is neither clonable nor comparable, and
/// the end marker is a separate type (not a common sequence).
pub struct Tape {
    data: Vec<u8>,
}

pub struct TapePos(usize);

pub struct TapeEnd;

impl Tape {
    pub fn new(data: Vec<u8>) -> Self {
        Tape { data }
    }
}

impl Sequence for Tape {
    type Item = u8;
    type Pos = TapePos;
    type End = TapeEnd;

    fn first(&self) -> TapePos {
        TapePos(0)
    }

    fn terminal(&self) -> TapeEnd {
        TapeEnd
    }

    fn lookup(&self, pos: &TapePos) -> &u8 {
        &self.data[pos.0]
    }

    fn step(&self, pos: &mut TapePos) {
        pos.0 += 1;
    }

    fn at_end(&self, pos: &TapePos, _end: &TapeEnd) -> bool {
        pos.0 >= self.data.len()
    }
}

/// Forward-only source: positions can be saved and compared, but there is
/// no stepping back and no random access.
pub struct FwdSeq {
    data: Vec<i32>,
}

#[derive(Clone, PartialEq)]
pub struct FwdPos(usize);

impl FwdSeq {
    pub fn new(data: Vec<i32>) -> Self {
        FwdSeq { data }
    }
}

impl Sequence for FwdSeq {
    type Item = i32;
    type Pos = FwdPos;
    type End = FwdPos;

    fn first(&self) -> FwdPos {
        FwdPos(0)
    }

    fn terminal(&self) -> FwdPos {
        FwdPos(self.data.len())
    }

    fn lookup(&self, pos: &FwdPos) -> &i32 {
        &self.data[pos.0]
    }

    fn step(&self, pos: &mut FwdPos) {
        pos.0 += 1;
    }

    fn at_end(&self, pos: &FwdPos, end: &FwdPos) -> bool {
        pos.0 >= end.0
    }
}

impl Forward for FwdSeq {}

/// Forward-only source of boxed elements, for indirection over a weak tier.
pub struct FwdBoxes {
    data: Vec<Box<i32>>,
}

impl FwdBoxes {
    pub fn new(data: Vec<Box<i32>>) -> Self {
        FwdBoxes { data }
    }
}

impl Sequence for FwdBoxes {
    type Item = Box<i32>;
    type Pos = FwdPos;
    type End = FwdPos;

    fn first(&self) -> FwdPos {
        FwdPos(0)
    }

    fn terminal(&self) -> FwdPos {
        FwdPos(self.data.len())
    }

    fn lookup(&self, pos: &FwdPos) -> &Box<i32> {
        &self.data[pos.0]
    }

    fn step(&self, pos: &mut FwdPos) {
        pos.0 += 1;
    }

    fn at_end(&self, pos: &FwdPos, end: &FwdPos) -> bool {
        pos.0 >= end.0
    }
}

impl Forward for FwdBoxes {}

/// Bidirectional source without random access or a known size.
pub struct BidiSeq {
    data: Vec<i32>,
}

impl BidiSeq {
    pub fn new(data: Vec<i32>) -> Self {
        BidiSeq { data }
    }
}

impl Sequence for BidiSeq {
    type Item = i32;
    type Pos = usize;
    type End = usize;

    fn first(&self) -> usize {
        0
    }

    fn terminal(&self) -> usize {
        self.data.len()
    }

    fn lookup(&self, pos: &usize) -> &i32 {
        &self.data[*pos]
    }

    fn step(&self, pos: &mut usize) {
        *pos += 1;
    }

    fn at_end(&self, pos: &usize, end: &usize) -> bool {
        pos >= end
    }
}

impl Forward for BidiSeq {}

impl Bidirectional for BidiSeq {
    fn step_back(&self, pos: &mut usize) {
        *pos -= 1;
    }
}
