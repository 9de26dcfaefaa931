//! Small, independent transformations over in-memory sequences and mappings.
//!
//! # Purpose
//! This crate collects the helper functions that tend to accumulate around `Vec`, slices and maps
//! in application code: single-element accessors with real errors, chunking and windowing,
//! order-preserving set algebra, associate/group-by conversions into insertion-ordered maps, and a
//! deferred [`Grouping`](grouping::Grouping) view for per-key aggregation. Every operation is a
//! pure, single-pass transformation over caller-owned data; nothing here holds state between
//! calls, spawns threads, or touches I/O.
//!
//! # Method
//! Operations are exposed as extension traits over `[T]` and [`IndexMap`](indexmap::IndexMap), one
//! generic function per operation, parameterized by caller-supplied closures for predicates,
//! transforms and comparators. Producing operations allocate a fresh result and leave the source
//! untouched; the in-place variants in [`sequence::order`] are the only mutating API.
//!
//! # Error Handling
//! Errors are strongly typed: small structs per failure condition, combined into enums for static
//! dispatch where one call can fail in more than one way. Failures that can only arise from caller
//! mistakes with caller-visible inputs (an empty source where an element is required, a zero chunk
//! size) are surfaced as [`Result`]s. Internal invariant violations that cannot occur under
//! correct sequencing are not worth taxing every signature for and panic instead, with the
//! matching [`error`] type providing the message.
//!
//! # Dependencies
//! [`derive_more`] removes the repetitive parts of the error enums. [`indexmap`] provides the
//! insertion-ordered mapping that associate, group-by and the grouping aggregations return, so
//! that key order always reflects first encounter. `rand` is only pulled in by the `shuffle`
//! feature for the in-place shuffle.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod error;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

#[cfg(feature = "grouping")]
pub mod grouping;

#[cfg(feature = "grouping")]
pub(crate) mod util;
