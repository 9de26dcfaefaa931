//! Operations over ordered sequences of elements, exposed as extension traits on `[T]`.
//!
//! [`SequenceExt`] covers the read-only and producing operations, [`SequenceMutExt`] the in-place
//! variants, [`BinarySearchExt`] search over pre-sorted sources and [`SetOpsExt`] the
//! order-preserving set algebra. Producing operations always allocate a fresh `Vec` (or
//! [`IndexMap`](indexmap::IndexMap) for the associate family) and never mutate the source.
//!
//! All traits are implemented for `[T]`, so they are available on slices, arrays and `Vec`s alike.

mod sequence;

pub mod order;
pub mod search;
pub mod sets;

mod tests;

pub use sequence::*;

#[doc(inline)]
pub use order::SequenceMutExt;
#[doc(inline)]
pub use search::BinarySearchExt;
#[doc(inline)]
pub use sets::SetOpsExt;

/// Returns the number of map slots worth reserving for `expected` entries.
///
/// For small maps one extra slot avoids an immediate grow; beyond that a third of headroom keeps
/// rehashing rare. This is a performance hint only and never affects results.
pub const fn capacity_for(expected: usize) -> usize {
    if expected < 3 {
        expected + 1
    } else {
        expected + expected / 3
    }
}
