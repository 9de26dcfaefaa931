use std::cmp::{self, Ordering};
use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{IndexOutOfBounds, InvalidSize, MultipleElements, NoSuchElement, SingleError};
use crate::sequence::capacity_for;

/// Read-only and producing operations over a sequence of elements.
///
/// Accessors return references into the source; producing operations allocate a fresh `Vec` (or
/// [`IndexMap`] for the associate family) and require `T: Clone` wherever source elements are
/// carried into the result. The source is never mutated.
pub trait SequenceExt<T> {
    /// Returns the first element.
    ///
    /// # Errors
    /// [`NoSuchElement`] if the sequence is empty.
    fn first_item(&self) -> Result<&T, NoSuchElement>;

    /// Returns the last element.
    ///
    /// # Errors
    /// [`NoSuchElement`] if the sequence is empty.
    fn last_item(&self) -> Result<&T, NoSuchElement>;

    /// Returns the first element matching `pred`.
    ///
    /// # Errors
    /// [`NoSuchElement`] if no element matches.
    fn first_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> Result<&T, NoSuchElement>;

    /// Returns the last element matching `pred`.
    ///
    /// # Errors
    /// [`NoSuchElement`] if no element matches.
    fn last_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> Result<&T, NoSuchElement>;

    /// Returns the only element of the sequence.
    ///
    /// # Errors
    /// [`NoSuchElement`](crate::error::NoSuchElement) if the sequence is empty,
    /// [`MultipleElements`](crate::error::MultipleElements) if it has more than one element.
    fn single_item(&self) -> Result<&T, SingleError>;

    /// Returns the only element matching `pred`.
    ///
    /// # Errors
    /// [`NoSuchElement`](crate::error::NoSuchElement) if no element matches,
    /// [`MultipleElements`](crate::error::MultipleElements) if more than one does.
    fn single_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> Result<&T, SingleError>;

    /// Returns true if every element matches `pred`. Vacuously true for an empty sequence.
    fn all_match<P: FnMut(&T) -> bool>(&self, pred: P) -> bool;

    /// Returns true if at least one element matches `pred`.
    fn any_match<P: FnMut(&T) -> bool>(&self, pred: P) -> bool;

    /// Returns true if no element matches `pred`.
    fn none_match<P: FnMut(&T) -> bool>(&self, pred: P) -> bool;

    /// Returns the number of elements matching `pred`.
    fn count_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> usize;

    /// Returns the index of the first element matching `pred`, if any.
    fn index_of_first<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize>;

    /// Returns the index of the last element matching `pred`, if any.
    fn index_of_last<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize>;

    /// Returns the elements matching `pred`, in source order.
    ///
    /// # Examples
    /// ```
    /// # use kollect::sequence::SequenceExt;
    /// assert_eq!([1, 2, 3, 4].filtered(|n| n % 2 == 0), [2, 4]);
    /// ```
    fn filtered<P: FnMut(&T) -> bool>(&self, pred: P) -> Vec<T>
    where
        T: Clone;

    /// Returns the elements not matching `pred`, in source order.
    fn filtered_not<P: FnMut(&T) -> bool>(&self, pred: P) -> Vec<T>
    where
        T: Clone;

    /// Returns the result of applying `transform` to each element.
    fn mapped<U, F: FnMut(&T) -> U>(&self, transform: F) -> Vec<U>;

    /// Returns the result of applying `transform` to each element and its index.
    fn mapped_indexed<U, F: FnMut(usize, &T) -> U>(&self, transform: F) -> Vec<U>;

    /// Applies `transform` to each element and concatenates the resulting sequences.
    fn flat_mapped<U, I, F>(&self, transform: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I;

    /// Folds the sequence left to right, starting from `initial`.
    fn fold_items<A, F: FnMut(A, &T) -> A>(&self, initial: A, op: F) -> A;

    /// Reduces the sequence left to right, seeding the accumulator with the first element.
    ///
    /// # Errors
    /// [`NoSuchElement`] if the sequence is empty.
    fn reduce_items<F: FnMut(T, &T) -> T>(&self, op: F) -> Result<T, NoSuchElement>
    where
        T: Clone;

    /// Returns the first `n` elements, or the whole sequence if it has fewer.
    fn take_items(&self, n: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns all elements after the first `n`, or an empty `Vec` if there are none.
    fn drop_items(&self, n: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the last `n` elements, or the whole sequence if it has fewer.
    fn take_last_items(&self, n: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns all elements before the last `n`, or an empty `Vec` if there are none.
    fn drop_last_items(&self, n: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the leading elements matching `pred`, stopping at the first that doesn't.
    fn take_while_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> Vec<T>
    where
        T: Clone;

    /// Skips the leading elements matching `pred` and returns the rest.
    fn drop_while_matching<P: FnMut(&T) -> bool>(&self, pred: P) -> Vec<T>
    where
        T: Clone;

    /// Returns the distinct elements, keeping the first occurrence of each in source order.
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Hash + Eq;

    /// Returns the elements whose key under `key_of` has not been seen before, in source order.
    fn distinct_by<K, F>(&self, key_of: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// Pairs this sequence with `other`, truncated to the shorter of the two.
    ///
    /// # Examples
    /// ```
    /// # use kollect::sequence::SequenceExt;
    /// assert_eq!([1, 2, 3].zip_with(&["a", "b"]), [(1, "a"), (2, "b")]);
    /// ```
    fn zip_with<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone;

    /// Returns the elements in ascending order. The source is left untouched.
    fn sorted(&self) -> Vec<T>
    where
        T: Clone + Ord;

    /// Returns the elements in descending order. The source is left untouched.
    fn sorted_desc(&self) -> Vec<T>
    where
        T: Clone + Ord;

    /// Returns the elements ordered by `cmp`. The sort is stable.
    fn sorted_by<F: FnMut(&T, &T) -> Ordering>(&self, cmp: F) -> Vec<T>
    where
        T: Clone;

    /// Returns the elements at the given `indices`, in the order the indices are listed.
    ///
    /// # Errors
    /// [`IndexOutOfBounds`] on the first index past the end of the sequence.
    fn slice_by_indices(&self, indices: &[usize]) -> Result<Vec<T>, IndexOutOfBounds>
    where
        T: Clone;

    /// Splits the sequence into consecutive chunks of `size` elements. Every chunk but possibly
    /// the last has exactly `size` elements; flattening the result reproduces the source.
    ///
    /// # Errors
    /// [`InvalidSize`] if `size` is zero.
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>, InvalidSize>
    where
        T: Clone;

    /// Returns sliding windows of `size` elements taken every `step` elements. When
    /// `partial_windows` is true, trailing windows shorter than `size` are kept.
    ///
    /// # Errors
    /// [`InvalidSize`] if `size` or `step` is zero.
    fn windowed(&self, size: usize, step: usize, partial_windows: bool) -> Result<Vec<Vec<T>>, InvalidSize>
    where
        T: Clone;

    /// Splits the sequence into the elements matching `pred` and those that don't, each in source
    /// order.
    fn partitioned<P: FnMut(&T) -> bool>(&self, pred: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone;

    /// Builds a mapping from the key-value pairs produced by `transform`. Later pairs override
    /// earlier ones on key collision; key order reflects first encounter.
    fn associate<K, V, F>(&self, transform: F) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> (K, V);

    /// Builds a mapping from each element's key under `key_of` to the element itself.
    ///
    /// # Examples
    /// ```
    /// # use kollect::sequence::SequenceExt;
    /// let by_len = ["a", "bb", "ccc"].associate_by(|s| s.len());
    /// assert_eq!(by_len.get(&2), Some(&"bb"));
    /// ```
    fn associate_by<K, F>(&self, key_of: F) -> IndexMap<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// Builds a mapping from each element to its value under `value_of`.
    fn associate_with<V, F>(&self, value_of: F) -> IndexMap<T, V>
    where
        T: Clone + Hash + Eq,
        F: FnMut(&T) -> V;

    /// Groups the elements by their key under `key_of`. Key order reflects first encounter and
    /// every group keeps source order.
    fn group_items_by<K, F>(&self, key_of: F) -> IndexMap<K, Vec<T>>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K;
}

impl<T> SequenceExt<T> for [T] {
    fn first_item(&self) -> Result<&T, NoSuchElement> {
        self.first().ok_or(NoSuchElement)
    }

    fn last_item(&self) -> Result<&T, NoSuchElement> {
        self.last().ok_or(NoSuchElement)
    }

    fn first_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Result<&T, NoSuchElement> {
        self.iter().find(|item| pred(item)).ok_or(NoSuchElement)
    }

    fn last_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Result<&T, NoSuchElement> {
        self.iter().rev().find(|item| pred(item)).ok_or(NoSuchElement)
    }

    fn single_item(&self) -> Result<&T, SingleError> {
        match self {
            [] => Err(NoSuchElement.into()),
            [item] => Ok(item),
            _ => Err(MultipleElements.into()),
        }
    }

    fn single_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Result<&T, SingleError> {
        let mut found = None;
        for item in self {
            if pred(item) {
                if found.is_some() {
                    return Err(MultipleElements.into());
                }
                found = Some(item);
            }
        }
        found.ok_or_else(|| NoSuchElement.into())
    }

    fn all_match<P: FnMut(&T) -> bool>(&self, mut pred: P) -> bool {
        self.iter().all(|item| pred(item))
    }

    fn any_match<P: FnMut(&T) -> bool>(&self, mut pred: P) -> bool {
        self.iter().any(|item| pred(item))
    }

    fn none_match<P: FnMut(&T) -> bool>(&self, mut pred: P) -> bool {
        !self.iter().any(|item| pred(item))
    }

    fn count_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> usize {
        self.iter().filter(|item| pred(item)).count()
    }

    fn index_of_first<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<usize> {
        self.iter().position(|item| pred(item))
    }

    fn index_of_last<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<usize> {
        self.iter().rposition(|item| pred(item))
    }

    fn filtered<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().filter(|item| pred(item)).cloned().collect()
    }

    fn filtered_not<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().filter(|item| !pred(item)).cloned().collect()
    }

    fn mapped<U, F: FnMut(&T) -> U>(&self, transform: F) -> Vec<U> {
        self.iter().map(transform).collect()
    }

    fn mapped_indexed<U, F: FnMut(usize, &T) -> U>(&self, mut transform: F) -> Vec<U> {
        self.iter().enumerate().map(|(index, item)| transform(index, item)).collect()
    }

    fn flat_mapped<U, I, F>(&self, transform: F) -> Vec<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.iter().flat_map(transform).collect()
    }

    fn fold_items<A, F: FnMut(A, &T) -> A>(&self, initial: A, op: F) -> A {
        self.iter().fold(initial, op)
    }

    fn reduce_items<F: FnMut(T, &T) -> T>(&self, op: F) -> Result<T, NoSuchElement>
    where
        T: Clone,
    {
        let (first, rest) = self.split_first().ok_or(NoSuchElement)?;
        Ok(rest.iter().fold(first.clone(), op))
    }

    fn take_items(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self[..cmp::min(n, self.len())].to_vec()
    }

    fn drop_items(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self[cmp::min(n, self.len())..].to_vec()
    }

    fn take_last_items(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self[self.len().saturating_sub(n)..].to_vec()
    }

    fn drop_last_items(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self[..self.len().saturating_sub(n)].to_vec()
    }

    fn take_while_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().take_while(|item| pred(item)).cloned().collect()
    }

    fn drop_while_matching<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().skip_while(|item| pred(item)).cloned().collect()
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Hash + Eq,
    {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        let mut result = Vec::new();
        for item in self {
            if seen.insert(item) {
                result.push(item.clone());
            }
        }
        result
    }

    fn distinct_by<K, F>(&self, mut key_of: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::with_capacity(self.len());
        let mut result = Vec::new();
        for item in self {
            if seen.insert(key_of(item)) {
                result.push(item.clone());
            }
        }
        result
    }

    fn zip_with<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone,
    {
        self.iter().zip(other).map(|(a, b)| (a.clone(), b.clone())).collect()
    }

    fn sorted(&self) -> Vec<T>
    where
        T: Clone + Ord,
    {
        let mut result = self.to_vec();
        result.sort();
        result
    }

    fn sorted_desc(&self) -> Vec<T>
    where
        T: Clone + Ord,
    {
        let mut result = self.to_vec();
        result.sort_by(|a, b| b.cmp(a));
        result
    }

    fn sorted_by<F: FnMut(&T, &T) -> Ordering>(&self, cmp: F) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = self.to_vec();
        result.sort_by(cmp);
        result
    }

    fn slice_by_indices(&self, indices: &[usize]) -> Result<Vec<T>, IndexOutOfBounds>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(indices.len());
        for &index in indices {
            let item = self.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })?;
            result.push(item.clone());
        }
        Ok(result)
    }

    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>, InvalidSize>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(InvalidSize { size });
        }
        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn windowed(&self, size: usize, step: usize, partial_windows: bool) -> Result<Vec<Vec<T>>, InvalidSize>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(InvalidSize { size });
        }
        if step == 0 {
            return Err(InvalidSize { size: step });
        }
        let mut result = Vec::new();
        let mut start = 0;
        while start < self.len() {
            let end = cmp::min(start.saturating_add(size), self.len());
            if end - start < size && !partial_windows {
                break;
            }
            result.push(self[start..end].to_vec());
            start = start.saturating_add(step);
        }
        Ok(result)
    }

    fn partitioned<P: FnMut(&T) -> bool>(&self, mut pred: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        for item in self {
            if pred(item) {
                matching.push(item.clone());
            } else {
                rest.push(item.clone());
            }
        }
        (matching, rest)
    }

    fn associate<K, V, F>(&self, mut transform: F) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> (K, V),
    {
        let mut map = IndexMap::with_capacity(capacity_for(self.len()));
        for item in self {
            let (key, value) = transform(item);
            map.insert(key, value);
        }
        map
    }

    fn associate_by<K, F>(&self, mut key_of: F) -> IndexMap<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut map = IndexMap::with_capacity(capacity_for(self.len()));
        for item in self {
            map.insert(key_of(item), item.clone());
        }
        map
    }

    fn associate_with<V, F>(&self, mut value_of: F) -> IndexMap<T, V>
    where
        T: Clone + Hash + Eq,
        F: FnMut(&T) -> V,
    {
        let mut map = IndexMap::with_capacity(capacity_for(self.len()));
        for item in self {
            map.insert(item.clone(), value_of(item));
        }
        map
    }

    fn group_items_by<K, F>(&self, mut key_of: F) -> IndexMap<K, Vec<T>>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut map: IndexMap<K, Vec<T>> = IndexMap::new();
        for item in self {
            map.entry(key_of(item)).or_default().push(item.clone());
        }
        map
    }
}

/// Splits a sequence of pairs into a `Vec` of firsts and a `Vec` of seconds.
pub fn unzip_pairs<T: Clone, U: Clone>(pairs: &[(T, U)]) -> (Vec<T>, Vec<U>) {
    let mut firsts = Vec::with_capacity(pairs.len());
    let mut seconds = Vec::with_capacity(pairs.len());
    for (first, second) in pairs {
        firsts.push(first.clone());
        seconds.push(second.clone());
    }
    (firsts, seconds)
}
