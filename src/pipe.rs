//! Pipeline composition for view adaptors.
//!
//! An adaptor is a value describing a view construction; `pipe` applies it.
//! `rng.pipe(Indirect)` and `indirect(rng)` build the same view, and
//! adaptors chain left to right:
//!
//! ```
//! use seqview::prelude::*;
//!
//! let boxes = vec![Box::new(1), Box::new(2)];
//! let view = (&boxes).pipe(Indirect);
//! assert_eq!(view.seq_iter().copied().collect::<Vec<_>>(), [1, 2]);
//! ```

/// A view construction, applicable to any compatible input.
pub trait Adaptor<R> {
    type Output;

    fn apply(self, rng: R) -> Self::Output;
}

/// Left-to-right application: `rng.pipe(a).pipe(b)`.
pub trait Pipe: Sized {
    #[inline]
    fn pipe<A: Adaptor<Self>>(self, adaptor: A) -> A::Output {
        adaptor.apply(self)
    }
}

impl<T> Pipe for T {}
