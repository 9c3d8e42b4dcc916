//! Linear time \(O(n)\): one pass over an input of size \(n\).

use num_traits::Zero;

/// Returns the sum of every item, or zero for an empty slice.
pub fn sum_all_items<T: Zero + Copy>(nums: &[T]) -> T {
    let mut total = T::zero();
    for &num in nums {
        total = total + num;
    }
    total
}

/// Returns `[0, 1, .., n - 1]`, built one push at a time.
pub fn create_list(n: usize) -> Vec<usize> {
    let mut list = Vec::new();
    for i in 0..n {
        list.push(i);
    }
    list
}

/// Returns the index of the first item equal to `target`.
///
/// Every item may have to be compared, so the worst case (a missing target)
/// touches all \(n\) of them.
pub fn linear_search<T: PartialEq>(nums: &[T], target: &T) -> Option<usize> {
    for (i, num) in nums.iter().enumerate() {
        if num == target {
            return Some(i);
        }
    }
    None
}
