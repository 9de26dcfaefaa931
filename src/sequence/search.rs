//! Binary search over pre-sorted sequences.

use std::cmp::Ordering;

/// Binary search over a sequence already sorted by the ordering the search uses.
///
/// If the source is not sorted accordingly, the result is meaningless. When the search key occurs
/// more than once, which matching index is returned is unspecified.
pub trait BinarySearchExt<T> {
    /// Searches for `target` in a sequence sorted ascending.
    ///
    /// # Errors
    /// The index at which `target` would have to be inserted to keep the sequence sorted.
    ///
    /// # Examples
    /// ```
    /// # use kollect::sequence::BinarySearchExt;
    /// assert_eq!([1, 3, 5, 7].binary_search_item(&5), Ok(2));
    /// assert_eq!([1, 3, 5, 7].binary_search_item(&4), Err(2));
    /// ```
    fn binary_search_item(&self, target: &T) -> Result<usize, usize>
    where
        T: Ord;

    /// Searches with `cmp`, which reports how each probed element compares to the target.
    ///
    /// # Errors
    /// The insertion point that would keep the sequence sorted.
    fn binary_search_with<F: FnMut(&T) -> Ordering>(&self, cmp: F) -> Result<usize, usize>;
}

impl<T> BinarySearchExt<T> for [T] {
    fn binary_search_item(&self, target: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_with(|probe| probe.cmp(target))
    }

    fn binary_search_with<F: FnMut(&T) -> Ordering>(&self, mut cmp: F) -> Result<usize, usize> {
        let mut low = 0;
        let mut high = self.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match cmp(&self[mid]) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }
}
