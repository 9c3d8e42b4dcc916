//! Constant time \(O(1)\): the running time does not depend on input size.

use core::ops::Add;

/// Returns `a + b`.
///
/// ```rust
/// use asymptote::complexity::constant::sum_nums;
///
/// assert_eq!(sum_nums(4, 5), 9);
/// assert_eq!(sum_nums(0, -1), -1);
/// ```
#[inline]
pub fn sum_nums<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns the first item of `nums`, or `None` if it is empty.
///
/// Indexing a slice is a single offset computation however long the slice is.
#[inline]
pub fn first_item<T>(nums: &[T]) -> Option<&T> {
    if nums.is_empty() {
        return None;
    }
    Some(&nums[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_nums_adds() {
        assert_eq!(sum_nums(4, 5), 9);
        assert_eq!(sum_nums(0, -1), -1);
        assert!((sum_nums(0.5_f64, 0.25) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn first_item_of_non_empty_and_empty() {
        assert_eq!(first_item(&[3, 2, 4]), Some(&3));
        assert_eq!(first_item::<i32>(&[]), None);
    }
}
