use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::MissingAccumulator;
use crate::util::OptionExtension;

/// A deferred pairing of a source with a key extractor.
///
/// Nothing is computed at construction; the source is consumed exactly once by whichever
/// aggregation is called. Built with [`grouping_by`](IntoGrouping::grouping_by).
pub struct Grouping<I, F> {
    source: I,
    key_of: F,
}

/// Entry point attaching [`grouping_by`](IntoGrouping::grouping_by) to any iterable source.
pub trait IntoGrouping: IntoIterator + Sized {
    /// Pairs this source with `key_of`, to be consumed by one of [`Grouping`]'s aggregations.
    ///
    /// # Examples
    /// ```
    /// # use kollect::grouping::IntoGrouping;
    /// let counts = ["apple", "banana", "avocado"]
    ///     .into_iter()
    ///     .grouping_by(|s| s.as_bytes()[0])
    ///     .each_count();
    /// assert_eq!(counts.get(&b'a'), Some(&2));
    /// ```
    fn grouping_by<K, F>(self, key_of: F) -> Grouping<Self::IntoIter, F>
    where
        F: FnMut(&Self::Item) -> K,
    {
        Grouping {
            source: self.into_iter(),
            key_of,
        }
    }
}

impl<I: IntoIterator> IntoGrouping for I {}

impl<I, T, K, F> Grouping<I, F>
where
    I: Iterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    /// The general aggregation: groups the source by key and threads each group's accumulator
    /// through `op`, which receives the group key, the current accumulator (absent for the first
    /// element of a group), the element, and whether the element is the first of its group.
    ///
    /// All other aggregations are specializations of this one.
    pub fn aggregate<A, Op>(self, mut op: Op) -> IndexMap<K, A>
    where
        Op: FnMut(&K, Option<A>, T, bool) -> A,
    {
        let Grouping { source, mut key_of } = self;
        // Accumulators build inside Option cells so an occupied entry can be folded by value
        // without disturbing the map's insertion order.
        let mut groups: IndexMap<K, Option<A>> = IndexMap::new();
        for item in source {
            match groups.entry(key_of(&item)) {
                Entry::Occupied(mut entry) => {
                    let acc = entry.get_mut().take();
                    let first = acc.is_none();
                    let next = op(entry.key(), acc, item, first);
                    *entry.get_mut() = Some(next);
                }
                Entry::Vacant(entry) => {
                    let next = op(entry.key(), None, item, true);
                    entry.insert(Some(next));
                }
            }
        }
        groups
            .into_iter()
            // UNREACHABLE: Every cell is refilled before the entry is released.
            .map(|(key, acc)| (key, unsafe { acc.filled() }))
            .collect()
    }

    /// Folds each group from a clone of `initial`.
    pub fn fold<A, Op>(self, initial: A, mut op: Op) -> IndexMap<K, A>
    where
        A: Clone,
        Op: FnMut(A, T) -> A,
    {
        self.aggregate(|_, acc, item, _| op(acc.unwrap_or_else(|| initial.clone()), item))
    }

    /// Folds each group from a seed computed by `init` for the group's key and first element.
    pub fn fold_with<A, In, Op>(self, mut init: In, mut op: Op) -> IndexMap<K, A>
    where
        In: FnMut(&K, &T) -> A,
        Op: FnMut(&K, A, T) -> A,
    {
        self.aggregate(|key, acc, item, _| {
            let acc = match acc {
                Some(acc) => acc,
                None => init(key, &item),
            };
            op(key, acc, item)
        })
    }

    /// Folds each group into `dest`, seeding absent keys with a clone of `initial`. Groups whose
    /// key is already present continue from the existing accumulator.
    pub fn fold_to<'a, A, Op>(self, dest: &'a mut IndexMap<K, A>, initial: A, mut op: Op) -> &'a mut IndexMap<K, A>
    where
        A: Clone,
        Op: FnMut(&mut A, T),
    {
        let Grouping { source, mut key_of } = self;
        for item in source {
            let acc = dest.entry(key_of(&item)).or_insert_with(|| initial.clone());
            op(acc, item);
        }
        dest
    }

    /// Reduces each group, seeding the accumulator with the group's first element.
    ///
    /// # Panics
    /// Panics with the [`MissingAccumulator`] message if a non-first element finds its group's
    /// accumulator absent. This cannot happen under the single-pass sequencing above; it would
    /// indicate a defect in the aggregation itself.
    pub fn reduce<Op>(self, mut op: Op) -> IndexMap<K, T>
    where
        Op: FnMut(&K, T, T) -> T,
    {
        self.aggregate(|key, acc, item, first| {
            if first {
                item
            } else {
                match acc {
                    Some(acc) => op(key, acc, item),
                    None => missing_accumulator(),
                }
            }
        })
    }

    /// Counts the elements of each group.
    pub fn each_count(self) -> IndexMap<K, usize> {
        self.fold(0, |count, _| count + 1)
    }

    /// Counts the elements of each group into `dest`, adding to any counts already present.
    pub fn each_count_to(self, dest: &mut IndexMap<K, usize>) -> &mut IndexMap<K, usize> {
        self.fold_to(dest, 0, |count, _| *count += 1)
    }
}

#[cold]
fn missing_accumulator() -> ! {
    panic!("{}", MissingAccumulator)
}
