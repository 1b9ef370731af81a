use std::cmp::Ordering;

/// Rearranges `items` into the next-greater ordering under `cmp`.
///
/// Returns `false` once `items` was already the greatest ordering, in which
/// case the slice is reset to the smallest (ascending) ordering. Equal
/// elements are treated as indistinguishable, so each distinct ordering of a
/// multiset is produced once.
pub fn next_permutation_by<T, F>(items: &mut [T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot`.
    let mut pivot = len - 1;
    while pivot > 0 && cmp(&items[pivot - 1], &items[pivot]) != Ordering::Less {
        pivot -= 1;
    }

    if pivot == 0 {
        items.reverse();
        return false;
    }

    // Rightmost element strictly greater than the one left of the suffix.
    let mut successor = len - 1;
    while cmp(&items[successor], &items[pivot - 1]) != Ordering::Greater {
        successor -= 1;
    }

    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
