//! Sorting with C-style three-way comparators.
//!
//! `qsort` takes a comparator returning negative, zero or positive. Here
//! the comparator is a typed closure and the work is done by the slice's
//! own unstable sort, so equal elements may be reordered exactly as
//! `qsort` allows.

use core::cmp::Ordering;

/// Map a three-way comparator result onto [`Ordering`].
#[inline]
fn sign_to_ordering(c: i32) -> Ordering {
    c.cmp(&0)
}

/// Sort `items` ascending according to `compare`.
pub fn qsort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> i32,
{
    if items.len() < 2 {
        return;
    }
    items.sort_unstable_by(|a, b| sign_to_ordering(compare(a, b)));
}

/// Ascending comparator for integers: `(a > b) - (a < b)`, which cannot
/// overflow the way `a - b` does.
#[inline]
pub fn cmp_int_asc(a: &i32, b: &i32) -> i32 {
    i32::from(a > b) - i32::from(a < b)
}

/// Binary search over a slice sorted by `compare`.
///
/// Returns the index of an element comparing equal to `key`.
pub fn bsearch_by<T, K: ?Sized, F>(key: &K, items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&K, &T) -> i32,
{
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sign_to_ordering(compare(key, &items[mid])) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
        }
    }
    None
}
