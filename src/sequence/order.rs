//! In-place variants: the only operations in the crate that mutate their receiver.

#[cfg(feature = "shuffle")]
use rand::Rng;

/// In-place reordering and filling over a mutable, randomly indexable sequence.
pub trait SequenceMutExt<T> {
    /// Sorts the sequence in descending order. The sort is stable.
    fn sort_descending(&mut self)
    where
        T: Ord;

    /// Sorts the sequence ascending by each element's key under `key_of`. The sort is stable.
    fn sort_by_key_order<K, F>(&mut self, key_of: F)
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// Reverses the order of the elements.
    fn reverse_in_place(&mut self);

    /// Overwrites every element with a clone of `value`.
    fn fill_with_value(&mut self, value: T)
    where
        T: Clone;

    /// Reorders the elements into a uniformly random permutation drawn from `rng`.
    #[cfg(feature = "shuffle")]
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> SequenceMutExt<T> for [T] {
    fn sort_descending(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| b.cmp(a));
    }

    fn sort_by_key_order<K, F>(&mut self, key_of: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by_key(key_of);
    }

    fn reverse_in_place(&mut self) {
        self.reverse();
    }

    fn fill_with_value(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in self.iter_mut() {
            *slot = value.clone();
        }
    }

    // Fisher-Yates, swapping each position with a not-yet-fixed one.
    #[cfg(feature = "shuffle")]
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            let j = rng.random_range(0..=i);
            self.swap(i, j);
        }
    }
}
