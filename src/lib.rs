//! # `asymptote` - Worked Examples of Asymptotic Complexity
//!
//! Small, readable routines that each sit squarely inside one growth class,
//! plus a graph connectivity check expressed against a minimal capability
//! trait so it runs unchanged over any graph representation.
//!
//! ## Growth Classes
//!
//! | Module | Class | Routines |
//! |--------|-------|----------|
//! | [`complexity::constant`] | \(O(1)\) | `sum_nums`, `first_item` |
//! | [`complexity::logarithmic`] | \(O(\log n)\) | `binary_search` |
//! | [`complexity::linear`] | \(O(n)\) | `sum_all_items`, `create_list`, `linear_search` |
//! | [`complexity::quadratic`] | \(O(n^2)\) | `create_matrix`, `all_pairs` |
//! | [`graph::algorithms`] | \(O(n + m)\) | `is_connected`, `Dfs` |
//!
//! ## Graphs
//!
//! Traversals only ever ask a graph three questions: does it contain a node,
//! how many nodes does it have, and what are a node's neighbors. Those are the
//! methods of [`Graph`]; [`AdjacencyGraph`] and [`AdjacencyMatrix`] implement it.
//!
//! ### Connectivity
//!
//! [`is_connected`] runs an iterative depth-first search from a start node over
//! an explicit stack and reports whether it reached every node. Neighbors are
//! pushed without checking whether they were already seen; duplicates are
//! discarded when popped. The traversal therefore costs \(O(n + m)\), which is
//! \(O(n^2)\) on a complete graph where \(m = n(n-1)/2\).
//!
//! ## Example
//!
//! ```rust
//! use asymptote::{is_connected, AdjacencyGraph};
//!
//! let mut g = AdjacencyGraph::new();
//! g.add_nodes_from([0, 1, 2, 3]);
//! g.add_edges_from([(0, 1), (1, 2)]);
//!
//! assert!(!is_connected(&g, &0));
//!
//! g.add_edge(2, 3);
//! assert!(is_connected(&g, &0));
//! assert!(!is_connected(&g, &4));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug!` events with traversal counters.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod complexity;
pub mod graph;

pub use complexity::Complexity;
pub use graph::{
    is_connected, is_connected_with, reachable_from, AdjacencyGraph, AdjacencyMatrix, Dfs, Graph,
    GraphError, PushPolicy, TraversalStats,
};
