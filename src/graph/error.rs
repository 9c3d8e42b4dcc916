//! Errors raised while building graphs.

use core::fmt;

/// Failure to build or extend a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge list referenced a node missing from the node list.
    UnknownNode {
        /// Position of the offending edge in the edge list.
        edge: usize,
    },
    /// A node index was outside a fixed-size graph.
    NodeOutOfBounds {
        /// The requested node.
        node: usize,
        /// Number of nodes in the graph.
        len: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { edge } => {
                write!(f, "edge #{edge} references a node missing from the node list")
            }
            Self::NodeOutOfBounds { node, len } => {
                write!(f, "node {node} out of bounds for n={len}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
