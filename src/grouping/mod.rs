//! Deferred per-key aggregation over a sequence.
//!
//! A [`Grouping`] pairs a source with a key extractor and does no work until one of its
//! aggregations consumes it; each aggregation is a single pass producing an
//! [`IndexMap`](indexmap::IndexMap) whose key order reflects first encounter.

mod grouping;


pub use grouping::*;
