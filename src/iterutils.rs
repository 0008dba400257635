//! Utilities for containers and iteration.

use std::cmp::{self, Ordering};

use itertools::Itertools;

/// Returns the permutation that sorts `keylist`. The sort is stable, including when `reverse` is
/// set. Keys that can't be compared (NaN) are treated as equal.
pub fn sort_indices<K: PartialOrd>(keylist: &[K], reverse: bool) -> Vec<usize> {
    (0..keylist.len())
        .sorted_by(|&a, &b| {
            let ord = keylist[a].partial_cmp(&keylist[b]).unwrap_or(Ordering::Equal);
            if reverse { ord.reverse() } else { ord }
        })
        .collect()
}

/// Sorts each of `lists` according to `keylist`.
///
/// Everything is cut down to the shortest of the lists and the key list first.
///
/// ```
/// use starks::iterutils::sort_by;
///
/// let sorted = sort_by(vec![vec!['3', '4', '2', '6'], vec!['a', 'k', 'o', 'p']], &[1, 3, 2, 0], false);
/// assert_eq!(sorted, vec![vec!['6', '3', '2', '4'], vec!['p', 'a', 'o', 'k']]);
/// ```
pub fn sort_by<T, K: PartialOrd>(lists: Vec<Vec<T>>, keylist: &[K], reverse: bool) -> Vec<Vec<T>> {
    let len = lists.iter().map(Vec::len).fold(keylist.len(), cmp::min);
    let order = sort_indices(&keylist[..len], reverse);
    lists
        .into_iter()
        .map(|list| {
            let mut slots: Vec<Option<T>> = list.into_iter().take(len).map(Some).collect();
            order.iter().filter_map(|&i| slots[i].take()).collect()
        })
        .collect()
}
