//! Built-in sequence sources.
//!
//! `[T]` is the canonical random-access source: positions and the end
//! marker are both `usize` indices, so slices are common sequences. Arrays
//! and the alloc containers delegate to the slice impl through `self[..]`.
//!
//! Out-of-range positions are a caller bug. The slice impl guards every
//! position-consuming operation with `debug_assert!`; release builds elide
//! the checks and the follow-up `lookup` panics on the bad index instead of
//! reading out of bounds.

use crate::caps::{Bidirectional, Forward, RandomAccess, Sequence, SequenceMut, SizedSequence};

impl<T> Sequence for [T] {
    type Item = T;
    type Pos = usize;
    type End = usize;

    #[inline]
    fn first(&self) -> usize {
        0
    }

    #[inline]
    fn terminal(&self) -> usize {
        self.len()
    }

    #[inline]
    fn lookup(&self, pos: &usize) -> &T {
        debug_assert!(*pos < self.len(), "lookup at or past the end");
        &self[*pos]
    }

    #[inline]
    fn step(&self, pos: &mut usize) {
        debug_assert!(*pos < self.len(), "step past the end");
        *pos += 1;
    }

    #[inline]
    fn at_end(&self, pos: &usize, end: &usize) -> bool {
        pos >= end
    }

    #[inline]
    fn bounds(&self, pos: &usize, end: &usize) -> (usize, Option<usize>) {
        let n = end.saturating_sub(*pos);
        (n, Some(n))
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn lookup_mut(&mut self, pos: &usize) -> &mut T {
        debug_assert!(*pos < self.len(), "lookup at or past the end");
        &mut self[*pos]
    }
}

impl<T> Forward for [T] {}

impl<T> Bidirectional for [T] {
    #[inline]
    fn step_back(&self, pos: &mut usize) {
        debug_assert!(*pos > 0, "step back before the beginning");
        *pos -= 1;
    }
}

impl<T> RandomAccess for [T] {
    #[inline]
    fn jump(&self, pos: &mut usize, n: isize) {
        let moved = pos.wrapping_add_signed(n);
        debug_assert!(moved <= self.len(), "jump out of bounds");
        *pos = moved;
    }

    #[inline]
    fn gap(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }

    #[inline]
    fn gap_to_end(&self, from: &usize, end: &usize) -> isize {
        *end as isize - *from as isize
    }
}

impl<T> SizedSequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

/// Implement the full capability set for an indexable container by
/// delegating to its slice form.
macro_rules! indexed_source {
    ($(#[$attr:meta])* [$($gen:tt)*] $Ty:ty) => {
        $(#[$attr])*
        impl<$($gen)*> Sequence for $Ty {
            type Item = T;
            type Pos = usize;
            type End = usize;

            #[inline]
            fn first(&self) -> usize {
                0
            }

            #[inline]
            fn terminal(&self) -> usize {
                self[..].len()
            }

            #[inline]
            fn lookup(&self, pos: &usize) -> &T {
                Sequence::lookup(&self[..], pos)
            }

            #[inline]
            fn step(&self, pos: &mut usize) {
                Sequence::step(&self[..], pos)
            }

            #[inline]
            fn at_end(&self, pos: &usize, end: &usize) -> bool {
                pos >= end
            }

            #[inline]
            fn bounds(&self, pos: &usize, end: &usize) -> (usize, Option<usize>) {
                Sequence::bounds(&self[..], pos, end)
            }
        }

        $(#[$attr])*
        impl<$($gen)*> SequenceMut for $Ty {
            #[inline]
            fn lookup_mut(&mut self, pos: &usize) -> &mut T {
                SequenceMut::lookup_mut(&mut self[..], pos)
            }
        }

        $(#[$attr])*
        impl<$($gen)*> Forward for $Ty {}

        $(#[$attr])*
        impl<$($gen)*> Bidirectional for $Ty {
            #[inline]
            fn step_back(&self, pos: &mut usize) {
                Bidirectional::step_back(&self[..], pos)
            }
        }

        $(#[$attr])*
        impl<$($gen)*> RandomAccess for $Ty {
            #[inline]
            fn jump(&self, pos: &mut usize, n: isize) {
                RandomAccess::jump(&self[..], pos, n)
            }

            #[inline]
            fn gap(&self, from: &usize, to: &usize) -> isize {
                RandomAccess::gap(&self[..], from, to)
            }

            #[inline]
            fn gap_to_end(&self, from: &usize, end: &usize) -> isize {
                RandomAccess::gap_to_end(&self[..], from, end)
            }
        }

        $(#[$attr])*
        impl<$($gen)*> SizedSequence for $Ty {
            #[inline]
            fn len(&self) -> usize {
                self[..].len()
            }
        }
    };
}

indexed_source! { [T, const N: usize] [T; N] }

indexed_source! {
    #[cfg(feature = "alloc")]
    [T] alloc::vec::Vec<T>
}

indexed_source! {
    #[cfg(feature = "alloc")]
    [T] alloc::boxed::Box<[T]>
}
