//! Basic graph implementations.
//!
//! Both representations are undirected and implement [`Graph`](super::Graph).

pub mod adjacency_graph;
pub mod adjacency_matrix;

pub use adjacency_graph::{AdjacencyGraph, AdjacencyNeighbors};
pub use adjacency_matrix::{AdjacencyMatrix, MatrixNeighbors};
