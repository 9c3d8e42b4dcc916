//! Graph representations and traversals written against a capability trait.
//!
//! Graph implementations are organized into categories:
//! - `basic`: concrete undirected representations
//! - `algorithms`: traversals generic over [`Graph`]

pub mod algorithms;
pub mod basic;
mod error;

use core::hash::Hash;

pub use algorithms::{is_connected, is_connected_with, reachable_from, Dfs, PushPolicy, TraversalStats};
pub use basic::{AdjacencyGraph, AdjacencyMatrix};
pub use error::GraphError;

/// The read-only view of a graph that traversals need.
///
/// Any representation (adjacency list, adjacency matrix, edge set, a wrapper
/// around a foreign graph type) can take part in the algorithms of this crate
/// by answering three questions.
///
/// Implementations are expected to be well formed: every node yielded by
/// [`Graph::neighbors`] is itself contained in the graph. For undirected
/// graphs the adjacency relation is symmetric.
pub trait Graph {
    /// Node identifier.
    type Node: Clone + Eq + Hash;

    /// Iterator over the neighbors of one node.
    type Neighbors<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Returns `true` if `node` is a node of this graph.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the neighbors of `node`.
    ///
    /// # Panics
    /// Implementations may panic if `node` is not contained in the graph.
    fn neighbors(&self, node: &Self::Node) -> Self::Neighbors<'_>;

    /// Returns `true` if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
