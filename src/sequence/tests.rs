#![cfg(test)]

use super::*;
use crate::error::{IndexOutOfBounds, InvalidSize, MultipleElements, NoSuchElement, SingleError};

#[test]
fn test_accessors() {
    let values = [10, 20, 30];

    assert_eq!(values.first_item(), Ok(&10));
    assert_eq!(values.last_item(), Ok(&30));
    assert_eq!(values.first_matching(|n| n % 20 == 0), Ok(&20));
    assert_eq!(values.last_matching(|n| *n < 30), Ok(&20));

    let empty: [i32; 0] = [];
    assert_eq!(empty.first_item(), Err(NoSuchElement));
    assert_eq!(empty.last_item(), Err(NoSuchElement));
    assert_eq!(
        values.first_matching(|n| *n > 100),
        Err(NoSuchElement),
        "A predicate matching nothing should report the sequence as empty."
    );
}

#[test]
fn test_single() {
    let empty: [i32; 0] = [];

    assert_eq!([7].single_item(), Ok(&7));
    assert_eq!(empty.single_item(), Err(SingleError::NoSuchElement(NoSuchElement)));
    assert_eq!(
        [7, 8].single_item(),
        Err(SingleError::MultipleElements(MultipleElements))
    );

    let values = [1, 2, 3, 4];
    assert_eq!(values.single_matching(|n| *n == 3), Ok(&3));
    assert_eq!(
        values.single_matching(|n| n % 2 == 0),
        Err(SingleError::MultipleElements(MultipleElements)),
        "Two matches should be ambiguous for a single-element query."
    );
    assert_eq!(
        values.single_matching(|n| *n > 9),
        Err(SingleError::NoSuchElement(NoSuchElement))
    );
}

#[test]
fn test_predicates() {
    let values = [2, 4, 6];

    assert!(values.all_match(|n| n % 2 == 0));
    assert!(values.any_match(|n| *n > 5));
    assert!(values.none_match(|n| *n > 6));
    assert_eq!(values.count_matching(|n| *n < 6), 2);
    assert_eq!(values.index_of_first(|n| *n > 2), Some(1));
    assert_eq!(values.index_of_last(|n| *n > 2), Some(2));
    assert_eq!(values.index_of_first(|n| *n > 9), None);

    let empty: [i32; 0] = [];
    assert!(empty.all_match(|_| false), "all_match should be vacuously true on empty input.");
}

#[test]
fn test_filter_and_map() {
    assert_eq!([1, 2, 3, 4].filtered(|n| n % 2 == 0), [2, 4]);
    assert_eq!([1, 2, 3, 4].filtered_not(|n| n % 2 == 0), [1, 3]);
    assert_eq!([1, 2, 3].mapped(|n| n * 10), [10, 20, 30]);
    assert_eq!(["a", "bb"].mapped_indexed(|i, s| format!("{i}{s}")), ["0a", "1bb"]);
    assert_eq!([1, 3].flat_mapped(|n| [*n, *n + 1]), [1, 2, 3, 4]);
}

#[test]
fn test_fold_and_reduce() {
    let values = [1, 2, 3, 4];

    assert_eq!(values.fold_items(0, |acc, n| acc + n), 10);
    assert_eq!(values.reduce_items(|acc, n| acc * n), Ok(24));
    let empty: [i32; 0] = [];
    assert_eq!(
        empty.reduce_items(|acc, n| acc + n),
        Err(NoSuchElement),
        "Reduce has no seed on an empty sequence."
    );
}

#[test]
fn test_take_and_drop() {
    let values = [1, 2, 3, 4, 5];

    assert_eq!(values.take_items(2), [1, 2]);
    assert_eq!(values.drop_items(2), [3, 4, 5]);
    assert_eq!(values.take_last_items(2), [4, 5]);
    assert_eq!(values.drop_last_items(2), [1, 2, 3]);

    assert_eq!(values.take_items(9), values, "Overshooting take should clamp to the whole source.");
    assert!(values.drop_items(9).is_empty(), "Overshooting drop should clamp to empty.");

    assert_eq!(values.take_while_matching(|n| *n < 3), [1, 2]);
    assert_eq!(values.drop_while_matching(|n| *n < 3), [3, 4, 5]);
}

#[test]
fn test_distinct() {
    assert_eq!(
        [3, 1, 3, 2, 1].distinct(),
        [3, 1, 2],
        "Only first occurrences should survive, in source order."
    );
    assert_eq!(["a", "bb", "cc", "d"].distinct_by(|s| s.len()), ["a", "bb"]);
}

#[test]
fn test_zip() {
    assert_eq!([1, 2, 3].zip_with(&["a", "b"]), [(1, "a"), (2, "b")]);
    assert_eq!(unzip_pairs(&[(1, "a"), (2, "b")]), (vec![1, 2], vec!["a", "b"]));
}

#[test]
fn test_sorted() {
    let values = [3, 1, 2];

    assert_eq!(values.sorted(), [1, 2, 3]);
    assert_eq!(values.sorted_desc(), [3, 2, 1]);
    assert_eq!(values.sorted_by(|a, b| b.cmp(a)), [3, 2, 1]);
    assert_eq!(values, [3, 1, 2], "Out-of-place sorts should leave the source untouched.");
}

#[test]
fn test_slice_by_indices() {
    let values = [10, 20, 30];

    assert_eq!(values.slice_by_indices(&[2, 0]), Ok(vec![30, 10]));
    assert_eq!(
        values.slice_by_indices(&[1, 3]),
        Err(IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_chunked() {
    let values = [1, 2, 3, 4, 5];

    assert_eq!(
        values.chunked(2),
        Ok(vec![vec![1, 2], vec![3, 4], vec![5]]),
        "Every chunk but the last should have exactly the requested size."
    );
    assert_eq!(values.chunked(0), Err(InvalidSize { size: 0 }));

    let empty: [i32; 0] = [];
    assert_eq!(empty.chunked(3), Ok(vec![]));
}

#[test]
fn test_windowed() {
    let values = [1, 2, 3, 4, 5];

    assert_eq!(
        values.windowed(3, 1, false),
        Ok(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]])
    );
    assert_eq!(
        values.windowed(3, 2, true),
        Ok(vec![vec![1, 2, 3], vec![3, 4, 5], vec![5]]),
        "Partial windows should keep the short trailing window."
    );
    assert_eq!(values.windowed(3, 2, false), Ok(vec![vec![1, 2, 3], vec![3, 4, 5]]));
    assert_eq!(values.windowed(0, 1, false), Err(InvalidSize { size: 0 }));
    assert_eq!(values.windowed(2, 0, false), Err(InvalidSize { size: 0 }));
}

#[test]
fn test_partitioned() {
    let (even, odd) = [1, 2, 3, 4].partitioned(|n| n % 2 == 0);
    assert_eq!(even, [2, 4]);
    assert_eq!(odd, [1, 3]);
}

#[test]
fn test_associate() {
    let by_len = ["a", "bb", "ccc"].associate_by(|s| s.len());
    assert_eq!(
        by_len.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [(1, "a"), (2, "bb"), (3, "ccc")]
    );

    let by_len = ["a", "b"].associate_by(|s| s.len());
    assert_eq!(by_len.get(&1), Some(&"b"), "Later keys should override earlier ones.");
    assert_eq!(by_len.len(), 1);

    let lengths = ["a", "bb"].associate_with(|s| s.len());
    assert_eq!(lengths.get(&"bb"), Some(&2));

    let pairs = [1, 2].associate(|n| (n * 10, n * 100));
    assert_eq!(pairs.get(&20), Some(&200));
}

#[test]
fn test_group_items_by() {
    let groups = ["apple", "avocado", "banana", "cherry"].group_items_by(|s| s.as_bytes()[0]);

    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        [b'a', b'b', b'c'],
        "Group keys should appear in first-encounter order."
    );
    assert_eq!(groups[&b'a'], ["apple", "avocado"]);
    assert_eq!(groups[&b'b'], ["banana"]);
}

#[test]
fn test_set_ops() {
    let left = [1, 2, 2, 3];
    let right = [3, 4, 4];

    assert_eq!(left.union_with(&right), [1, 2, 3, 4]);
    assert_eq!(left.intersect_with(&right), [3]);
    assert_eq!(left.minus_elements(&right), [1, 2]);
    assert_eq!(
        [3, 1].union_with(&[2, 1]),
        [3, 1, 2],
        "Union should keep the first operand's order, then append unique elements of the second."
    );
}

#[test]
fn test_binary_search() {
    let values = [1, 3, 5, 7];

    assert_eq!(values.binary_search_item(&5), Ok(2));
    assert_eq!(values.binary_search_item(&1), Ok(0));
    assert_eq!(values.binary_search_item(&8), Err(4));
    assert_eq!(values.binary_search_item(&0), Err(0));
    assert_eq!(values.binary_search_with(|probe| probe.cmp(&4)), Err(2));

    let empty: [i32; 0] = [];
    assert_eq!(empty.binary_search_item(&1), Err(0));
}

#[test]
fn test_in_place_variants() {
    let mut values = [2, 1, 3];
    values.sort_descending();
    assert_eq!(values, [3, 2, 1]);

    let mut words = ["ccc", "a", "bb"];
    words.sort_by_key_order(|s| s.len());
    assert_eq!(words, ["a", "bb", "ccc"]);

    let mut values = [1, 2, 3];
    values.reverse_in_place();
    assert_eq!(values, [3, 2, 1]);

    let mut values = [1, 2, 3];
    values.fill_with_value(9);
    assert_eq!(values, [9, 9, 9]);
}

#[cfg(feature = "shuffle")]
#[test]
fn test_shuffle_is_a_permutation() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(7);
    let mut values: Vec<u32> = (0..50).collect();
    values.shuffle_with(&mut rng);

    assert_ne!(values, (0..50).collect::<Vec<_>>(), "50 elements should not shuffle to identity.");
    assert_eq!(values.sorted(), (0..50).collect::<Vec<_>>());
}

#[test]
fn test_capacity_for() {
    assert_eq!(capacity_for(0), 1);
    assert_eq!(capacity_for(2), 3);
    assert_eq!(capacity_for(3), 4);
    assert_eq!(capacity_for(6), 8);
    assert_eq!(capacity_for(100), 133);
}
