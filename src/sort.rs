use std::cmp::Ordering;
use std::mem;

/// In-place quicksort of `v` using the first element of every range as pivot.
///
/// Not stable. Sorted or reverse-sorted input degrades to O(n²) comparisons,
/// but the recursion always descends into the smaller side, so stack depth
/// stays logarithmic.
pub fn quick_sort<T, F>(mut v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let pivot = partition(v, cmp);
        let (left, right) = mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, cmp);
            v = right;
        } else {
            quick_sort(right, cmp);
            v = left;
        }
    }
}

/// Partitions `v` around `v[0]` and returns the pivot's final index.
///
/// Everything before the returned index compares `<=` the pivot, everything
/// after it compares `>`.
fn partition<T, F>(v: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(v.len() > 1);
    let mut i = 1;
    let mut j = v.len() - 1;

    while i <= j {
        while i <= j && cmp(&v[i], &v[0]) != Ordering::Greater {
            i += 1;
        }
        // j >= i >= 1 whenever it is decremented.
        while i <= j && cmp(&v[j], &v[0]) == Ordering::Greater {
            j -= 1;
        }
        if i < j {
            v.swap(i, j);
        }
    }

    v.swap(0, j);
    j
}
