//! Capability detection and monotonicity across wrapping layers.

mod common;

use core::iter::FusedIterator;

use common::{BidiSeq, FwdBoxes, FwdSeq, Tape};
use seqview::prelude::*;
use seqview::{cap_dispatch, has_cap, Caps, SeqIter};

#[test]
fn synthetic_sources_sit_on_their_tier() {
    assert!(has_cap!(Tape: Sequence));
    assert!(!has_cap!(Tape: Forward));

    assert!(has_cap!(FwdSeq: Forward));
    assert!(!has_cap!(FwdSeq: Bidirectional));

    assert!(has_cap!(BidiSeq: Bidirectional));
    assert!(!has_cap!(BidiSeq: RandomAccess));
    assert!(!has_cap!(BidiSeq: SizedSequence));

    assert!(has_cap!([i32]: RandomAccess & SizedSequence & SequenceMut));
}

#[test]
fn common_follows_the_end_type() {
    assert!(has_cap!([i32]: CommonSequence));
    assert!(has_cap!(FwdSeq: CommonSequence));
    assert!(!has_cap!(Tape: CommonSequence));
}

#[test]
fn caps_consts_agree_with_has_cap() {
    // Absent capabilities resolve through the fallback traits.
    use seqview::caps::{RandomAccessFallback as _, SequenceMutFallback as _};

    assert!(Caps::<BidiSeq>::IS_BIDIRECTIONAL);
    assert!(!Caps::<BidiSeq>::IS_RANDOM_ACCESS);
    assert!(Caps::<[u8]>::IS_SEQUENCE_MUT);
    assert!(!Caps::<FwdSeq>::IS_SEQUENCE_MUT);
}

#[test]
fn ref_views_forward_everything_but_mutation() {
    assert!(has_cap!(RefView<'static, [i32]>: RandomAccess & SizedSequence));
    assert!(has_cap!(RefView<'static, [i32]>: CommonSequence));
    assert!(!has_cap!(RefView<'static, [i32]>: SequenceMut));

    assert!(has_cap!(MutView<'static, [i32]>: RandomAccess & SequenceMut));

    // The wrapped tier is the ceiling: wrapping never adds a capability.
    assert!(has_cap!(RefView<'static, BidiSeq>: Bidirectional));
    assert!(!has_cap!(RefView<'static, BidiSeq>: RandomAccess));
    assert!(!has_cap!(RefView<'static, FwdSeq>: Bidirectional));
}

#[test]
fn indirection_preserves_the_source_tier() {
    assert!(has_cap!(IndirectView<RefView<'static, [Box<i32>]>>: RandomAccess & SizedSequence));
    assert!(!has_cap!(IndirectView<RefView<'static, [Box<i32>]>>: SequenceMut));
    assert!(has_cap!(IndirectView<MutView<'static, [Box<i32>]>>: SequenceMut));

    assert!(has_cap!(IndirectView<RefView<'static, FwdBoxes>>: Forward));
    assert!(!has_cap!(IndirectView<RefView<'static, FwdBoxes>>: Bidirectional));
    assert!(!has_cap!(IndirectView<RefView<'static, FwdBoxes>>: SizedSequence));
}

#[test]
fn iterator_tiers_are_derived_structurally() {
    assert!(has_cap!(SeqIter<'static, [i32]>: DoubleEndedIterator));
    assert!(has_cap!(SeqIter<'static, [i32]>: ExactSizeIterator));
    assert!(has_cap!(SeqIter<'static, [i32]>: FusedIterator));

    // Forward tier: replayable, but one-directional and sizeless.
    assert!(has_cap!(SeqIter<'static, FwdSeq>: Clone));
    assert!(!has_cap!(SeqIter<'static, FwdSeq>: DoubleEndedIterator));
    assert!(!has_cap!(SeqIter<'static, FwdSeq>: ExactSizeIterator));

    // Single-pass tier: not even replayable.
    assert!(!has_cap!(SeqIter<'static, Tape>: Clone));
    assert!(has_cap!(SeqIter<'static, Tape>: FusedIterator));

    // Bidirectional but sizeless: reversible without a length.
    assert!(has_cap!(SeqIter<'static, BidiSeq>: DoubleEndedIterator));
    assert!(!has_cap!(SeqIter<'static, BidiSeq>: ExactSizeIterator));
}

#[test]
fn probes_lift_into_type_space() {
    use seqview::{Absent, Bool, CapResult, Present};

    const SLICE_RA: bool = has_cap!([i32]: RandomAccess);
    const TAPE_RA: bool = has_cap!(Tape: RandomAccess);

    let _: Present = CapResult::<SLICE_RA>::default();
    let _: Absent = CapResult::<TAPE_RA>::default();
    assert!(<CapResult<SLICE_RA> as Bool>::VALUE);
}

#[test]
fn cap_dispatch_picks_a_strategy_per_type() {
    fn strategy_for_slice() -> &'static str {
        cap_dispatch!([i32]: RandomAccess, {
            Present => "jump",
            Absent => "walk",
        })
    }

    fn strategy_for_tape() -> &'static str {
        cap_dispatch!(Tape: RandomAccess, {
            Present => "jump",
            Absent => "walk",
        })
    }

    assert_eq!(strategy_for_slice(), "jump");
    assert_eq!(strategy_for_tape(), "walk");
}
