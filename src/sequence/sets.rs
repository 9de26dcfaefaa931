//! Set algebra over sequences, preserving the iteration order of the first operand.
//!
//! Results are always distinct. Elements keep the order in which they first appear in `self`;
//! for a union, unique elements of the second operand follow in their own order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::sequence::SequenceExt;

pub trait SetOpsExt<T: Clone + Hash + Eq> {
    /// Returns the distinct elements of `self` followed by the elements of `other` not already
    /// present. (`self ∪ other`)
    fn union_with(&self, other: &[T]) -> Vec<T>;

    /// Returns the distinct elements of `self` that also appear in `other`. (`self ∩ other`)
    fn intersect_with(&self, other: &[T]) -> Vec<T>;

    /// Returns the distinct elements of `self` that do not appear in `other`. (`self \ other`)
    fn minus_elements(&self, other: &[T]) -> Vec<T>;
}

impl<T: Clone + Hash + Eq> SetOpsExt<T> for [T] {
    fn union_with(&self, other: &[T]) -> Vec<T> {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len() + other.len());
        let mut result = Vec::new();
        for item in self.iter().chain(other) {
            if seen.insert(item) {
                result.push(item.clone());
            }
        }
        result
    }

    fn intersect_with(&self, other: &[T]) -> Vec<T> {
        let members: HashSet<&T> = other.iter().collect();
        self.distinct()
            .into_iter()
            .filter(|item| members.contains(item))
            .collect()
    }

    fn minus_elements(&self, other: &[T]) -> Vec<T> {
        let members: HashSet<&T> = other.iter().collect();
        self.distinct()
            .into_iter()
            .filter(|item| !members.contains(item))
            .collect()
    }
}
