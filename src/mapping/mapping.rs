use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::sequence::capacity_for;

/// Read-only and producing operations over an insertion-ordered mapping.
///
/// Producing operations allocate a fresh map presized with
/// [`capacity_for`](crate::sequence::capacity_for) and never mutate the source; [`get_or_put`] is
/// the only method that inserts into the receiver.
///
/// [`get_or_put`]: MappingExt::get_or_put
pub trait MappingExt<K, V, S> {
    /// Returns the value for `key`, or `default` when the key is absent.
    fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V;

    /// Returns a clone of the value for `key`, or the result of `default` when the key is absent.
    fn get_or_else<F: FnOnce() -> V>(&self, key: &K, default: F) -> V
    where
        V: Clone;

    /// Returns the value for `key`, first computing and inserting it from `default` when absent.
    /// An existing value is never recomputed or replaced.
    fn get_or_put<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V;

    /// Returns a new mapping with `key` associated to `value`. An existing key keeps its entry
    /// position and only has its value replaced.
    fn plus_entry(&self, key: K, value: V) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns a new mapping containing the entries of `self` then those of `other`. On key
    /// collision the value from `other` wins while the key keeps its original position.
    fn merged(&self, other: &IndexMap<K, V, S>) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns a new mapping without `key`, other entries keeping their order.
    fn minus_key(&self, key: &K) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns a new mapping without any of `keys`, other entries keeping their order.
    fn minus_keys<'a, I: IntoIterator<Item = &'a K>>(&self, keys: I) -> IndexMap<K, V, S>
    where
        K: Clone + 'a,
        V: Clone;

    /// Returns the entries matching `pred`, in entry order.
    fn filter_entries<P: FnMut(&K, &V) -> bool>(&self, pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns the entries whose key matches `pred`, in entry order.
    fn filter_keys<P: FnMut(&K) -> bool>(&self, pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns the entries whose value matches `pred`, in entry order.
    fn filter_values<P: FnMut(&V) -> bool>(&self, pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone;

    /// Returns a new mapping with each value replaced by `transform` of the entry. Keys and their
    /// order are unchanged.
    fn map_values<U, F: FnMut(&K, &V) -> U>(&self, transform: F) -> IndexMap<K, U, S>
    where
        K: Clone;

    /// Returns a new mapping with each key replaced by `transform` of the entry. When two entries
    /// map to the same key, the later one wins.
    fn map_keys<L, F>(&self, transform: F) -> IndexMap<L, V, S>
    where
        V: Clone,
        L: Hash + Eq,
        F: FnMut(&K, &V) -> L;

    /// Returns true if every entry matches `pred`. Vacuously true for an empty mapping.
    fn all_entries<P: FnMut(&K, &V) -> bool>(&self, pred: P) -> bool;

    /// Returns true if at least one entry matches `pred`.
    fn any_entries<P: FnMut(&K, &V) -> bool>(&self, pred: P) -> bool;

    /// Returns true if no entry matches `pred`.
    fn none_entries<P: FnMut(&K, &V) -> bool>(&self, pred: P) -> bool;

    /// Returns the entries as key-value pairs, in entry order.
    fn to_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone;
}

impl<K, V, S> MappingExt<K, V, S> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    fn get_or_else<F: FnOnce() -> V>(&self, key: &K, default: F) -> V
    where
        V: Clone,
    {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default(),
        }
    }

    fn get_or_put<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        self.entry(key).or_insert_with(default)
    }

    fn plus_entry(&self, key: K, value: V) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        let mut result = cloned_with_extra(self, 1);
        result.insert(key, value);
        result
    }

    fn merged(&self, other: &IndexMap<K, V, S>) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        let mut result = cloned_with_extra(self, other.len());
        result.extend(other.iter().map(|(key, value)| (key.clone(), value.clone())));
        result
    }

    fn minus_key(&self, key: &K) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        self.filter_keys(|candidate| candidate != key)
    }

    fn minus_keys<'a, I: IntoIterator<Item = &'a K>>(&self, keys: I) -> IndexMap<K, V, S>
    where
        K: Clone + 'a,
        V: Clone,
    {
        let removed: HashSet<&K> = keys.into_iter().collect();
        self.filter_keys(|candidate| !removed.contains(candidate))
    }

    fn filter_entries<P: FnMut(&K, &V) -> bool>(&self, mut pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .filter(|&(key, value)| pred(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn filter_keys<P: FnMut(&K) -> bool>(&self, mut pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        self.filter_entries(|key, _| pred(key))
    }

    fn filter_values<P: FnMut(&V) -> bool>(&self, mut pred: P) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
    {
        self.filter_entries(|_, value| pred(value))
    }

    fn map_values<U, F: FnMut(&K, &V) -> U>(&self, mut transform: F) -> IndexMap<K, U, S>
    where
        K: Clone,
    {
        let mut result = IndexMap::with_capacity_and_hasher(capacity_for(self.len()), S::default());
        for (key, value) in self {
            result.insert(key.clone(), transform(key, value));
        }
        result
    }

    fn map_keys<L, F>(&self, mut transform: F) -> IndexMap<L, V, S>
    where
        V: Clone,
        L: Hash + Eq,
        F: FnMut(&K, &V) -> L,
    {
        let mut result = IndexMap::with_capacity_and_hasher(capacity_for(self.len()), S::default());
        for (key, value) in self {
            result.insert(transform(key, value), value.clone());
        }
        result
    }

    fn all_entries<P: FnMut(&K, &V) -> bool>(&self, mut pred: P) -> bool {
        self.iter().all(|(key, value)| pred(key, value))
    }

    fn any_entries<P: FnMut(&K, &V) -> bool>(&self, mut pred: P) -> bool {
        self.iter().any(|(key, value)| pred(key, value))
    }

    fn none_entries<P: FnMut(&K, &V) -> bool>(&self, mut pred: P) -> bool {
        !self.any_entries(pred)
    }

    fn to_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
    }
}

/// Builds an insertion-ordered mapping from key-value pairs. Later pairs override earlier ones on
/// key collision. The map is presized for the iterator's lower size bound.
pub fn from_pairs<K, V, S, I>(pairs: I) -> IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    I: IntoIterator<Item = (K, V)>,
{
    let pairs = pairs.into_iter();
    let (low, _) = pairs.size_hint();
    let mut map = IndexMap::with_capacity_and_hasher(capacity_for(low), S::default());
    for (key, value) in pairs {
        map.insert(key, value);
    }
    map
}

fn cloned_with_extra<K, V, S>(source: &IndexMap<K, V, S>, extra: usize) -> IndexMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = IndexMap::with_capacity_and_hasher(capacity_for(source.len() + extra), S::default());
    result.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
    result
}
