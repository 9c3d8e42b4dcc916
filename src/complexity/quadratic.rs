//! Quadratic time \(O(n^2)\): a pass over the input nested inside another.

use core::iter::FusedIterator;

/// Returns an `n x n` matrix whose every row is `[0, 1, .., n - 1]`.
///
/// ```rust
/// use asymptote::complexity::quadratic::create_matrix;
///
/// assert_eq!(create_matrix(2), vec![vec![0, 1], vec![0, 1]]);
/// assert!(create_matrix(0).is_empty());
/// ```
pub fn create_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            row.push(j);
        }
        matrix.push(row);
    }
    matrix
}

/// Returns an iterator over every pair `(j, i)` with `0 <= j < i < n`.
///
/// Pairs are grouped by their larger element: `all_pairs(3)` yields
/// `(0, 1), (0, 2), (1, 2)`. The count is \(0 + 1 + \dots + (n-1) = n(n-1)/2\).
pub fn all_pairs(n: usize) -> AllPairs {
    AllPairs { n, i: 1, j: 0 }
}

/// Iterator returned by [`all_pairs`].
#[derive(Debug, Clone)]
pub struct AllPairs {
    n: usize,
    i: usize,
    j: usize,
}

impl Iterator for AllPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n {
            return None;
        }
        let pair = (self.j, self.i);
        self.j += 1;
        if self.j == self.i {
            self.i += 1;
            self.j = 0;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.i >= self.n {
            return (0, Some(0));
        }
        // rest of the current group, then full groups i+1..n
        let remaining = triangular(self.n - 1)
            .map(|all| all - triangular(self.i).unwrap_or(0) + (self.i - self.j));
        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// Returns `0 + 1 + .. + k`, or `None` if it does not fit in a `usize`.
fn triangular(k: usize) -> Option<usize> {
    if k % 2 == 0 {
        (k / 2).checked_mul(k + 1)
    } else {
        k.checked_mul((k + 1) / 2)
    }
}

impl ExactSizeIterator for AllPairs {}
impl FusedIterator for AllPairs {}
