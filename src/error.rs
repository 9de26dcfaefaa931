//! Error types for the sequence, mapping and grouping operations.
//!
//! Each failure condition gets its own small struct; operations that can fail in more than one way
//! return an enum combining them, using static dispatch rather than boxing.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An element was required but the source was empty, or no element matched the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No element found in an empty or fully filtered sequence!")
    }
}

impl Error for NoSuchElement {}

/// A single-element query matched more than one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultipleElements;

impl Display for MultipleElements {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "More than one element matched a single-element query!")
    }
}

impl Error for MultipleElements {}

/// A size or step parameter was zero where a positive value is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSize {
    pub size: usize,
}

impl Display for InvalidSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Size and step parameters must be positive but was {}!", self.size)
    }
}

impl Error for InvalidSize {}

/// A requested index lies beyond the end of the source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for sequence with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A group already has elements but its accumulator is absent.
///
/// This cannot happen under correct single-pass sequencing; it indicates a defect in the
/// aggregation itself, so it surfaces as a panic message rather than a [`Result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingAccumulator;

impl Display for MissingAccumulator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Accumulator missing for a group that already has elements!")
    }
}

impl Error for MissingAccumulator {}

/// The ways a single-element query can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SingleError {
    NoSuchElement(NoSuchElement),
    MultipleElements(MultipleElements),
}
