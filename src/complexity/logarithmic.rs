//! Logarithmic time \(O(\log n)\): each step halves what is left to examine.

use core::cmp::Ordering;

/// Searches a sorted slice for `target` and returns its index.
///
/// Keeps a closed interval `[left, right]` of candidate positions and probes
/// its midpoint, discarding the half that cannot contain `target`. With
/// duplicate items, any matching index may be returned.
///
/// `nums` must be sorted in ascending order; otherwise the result is
/// unspecified (but the call still terminates).
///
/// ```rust
/// use asymptote::complexity::logarithmic::binary_search;
///
/// assert_eq!(binary_search(&[1, 5, 8, 10], &8), Some(2));
/// assert_eq!(binary_search(&[1, 5, 8, 10], &4), None);
/// ```
pub fn binary_search<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    let mut left = 0usize;
    let mut right = nums.len().checked_sub(1)?;

    while left <= right {
        let mid = left + (right - left) / 2;
        match target.cmp(&nums[mid]) {
            Ordering::Less => {
                // `right` would underflow past the first element.
                right = mid.checked_sub(1)?;
            }
            Ordering::Greater => left = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
