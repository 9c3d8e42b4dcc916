//! A dense adjacency-matrix undirected graph over nodes `0..n`.

use crate::graph::{Graph, GraphError};

/// An undirected graph stored as a row-major `n x n` boolean matrix.
///
/// The node set is fixed at construction. Edges are written to both
/// `(u, v)` and `(v, u)`, so the matrix is always symmetric.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) | Two writes |
/// | `has_edge` | \(O(1)\) | One read |
/// | `neighbors` | \(O(n)\) | Scans a full row |
/// | storage | \(O(n^2)\) | Independent of edge count |
///
/// Because every neighbor scan reads a whole row, a DFS over this
/// representation costs \(O(n^2)\) regardless of how sparse the graph is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `n` nodes and zero edges.
    ///
    /// # Panics
    /// Panics if `n * n` cells do not fit in a `usize`.
    pub fn new(n: usize) -> Self {
        let Some(len) = n.checked_mul(n) else {
            panic!("matrix of {n}x{n} cells out of bounds for n={n}");
        };
        Self {
            n,
            cells: vec![false; len],
        }
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// # Panics
    /// Panics if `u` or `v` are out of bounds.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n, "node {u} out of bounds for n={}", self.n);
        assert!(v < self.n, "node {v} out of bounds for n={}", self.n);
        self.set(u, v);
    }

    /// Adds the undirected edge `{u, v}`, reporting out-of-bounds nodes as an error.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] for the first endpoint that is not below `n`.
    pub fn try_add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        for node in [u, v] {
            if node >= self.n {
                return Err(GraphError::NodeOutOfBounds { node, len: self.n });
            }
        }
        self.set(u, v);
        Ok(())
    }

    /// Checks if the edge `{u, v}` exists. Out-of-bounds nodes have no edges.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n && v < self.n && self.cells[u * self.n + v]
    }

    /// Returns the number of undirected edges, counting each self loop once.
    pub fn edge_count(&self) -> usize {
        (0..self.n)
            .map(|u| self.row(u)[u..].iter().filter(|&&set| set).count())
            .sum()
    }

    #[inline]
    fn row(&self, u: usize) -> &[bool] {
        &self.cells[u * self.n..(u + 1) * self.n]
    }

    #[inline]
    fn set(&mut self, u: usize, v: usize) {
        self.cells[u * self.n + v] = true;
        self.cells[v * self.n + u] = true;
    }
}

/// Iterator over the neighbors of one node of an [`AdjacencyMatrix`].
pub struct MatrixNeighbors<'a> {
    row: core::iter::Enumerate<core::slice::Iter<'a, bool>>,
}

impl Iterator for MatrixNeighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.row.find_map(|(v, &set)| set.then_some(v))
    }
}

impl Graph for AdjacencyMatrix {
    type Node = usize;
    type Neighbors<'a> = MatrixNeighbors<'a>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, node: &usize) -> bool {
        *node < self.n
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.n
    }

    /// # Panics
    /// Panics if `node` is out of bounds.
    fn neighbors(&self, node: &usize) -> Self::Neighbors<'_> {
        assert!(*node < self.n, "node {node} out of bounds for n={}", self.n);
        MatrixNeighbors {
            row: self.row(*node).iter().enumerate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_matrix_is_symmetric() {
        let mut m = AdjacencyMatrix::new(4);
        m.add_edge(0, 3);
        m.add_edge(2, 1);

        assert!(m.has_edge(3, 0));
        assert!(m.has_edge(1, 2));
        assert!(!m.has_edge(0, 1));
        assert!(!m.has_edge(0, 9));
        assert_eq!(m.edge_count(), 2);
    }

    #[test]
    fn adjacency_matrix_neighbors_in_index_order() {
        let mut m = AdjacencyMatrix::new(4);
        m.add_edge(1, 3);
        m.add_edge(1, 0);
        m.add_edge(1, 1);

        assert_eq!(m.neighbors(&1).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(m.neighbors(&2).count(), 0);
        assert_eq!(m.edge_count(), 3);
    }

    #[test]
    fn adjacency_matrix_try_add_edge_reports_bounds() {
        let mut m = AdjacencyMatrix::new(2);
        assert_eq!(m.try_add_edge(0, 1), Ok(()));
        assert_eq!(
            m.try_add_edge(1, 2),
            Err(GraphError::NodeOutOfBounds { node: 2, len: 2 })
        );
        assert_eq!(m.edge_count(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn adjacency_matrix_add_edge_panics_out_of_bounds() {
        let mut m = AdjacencyMatrix::new(2);
        m.add_edge(0, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds for n=")]
    fn adjacency_matrix_new_rejects_overflowing_size() {
        let _ = AdjacencyMatrix::new(usize::MAX / 2);
    }

    #[test]
    fn empty_matrix_contains_nothing() {
        let m = AdjacencyMatrix::new(0);
        assert!(m.is_empty());
        assert!(!m.contains(&0));
    }
}
