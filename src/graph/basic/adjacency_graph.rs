//! A dynamic adjacency-list undirected graph.
//!
//! Nodes are arbitrary hashable identifiers kept in insertion order. Each node
//! is mapped to a dense index; adjacency lists store indices, so neighbor scans
//! walk contiguous vectors.

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::complexity::quadratic::all_pairs;
use crate::graph::{Graph, GraphError};

/// An undirected adjacency list graph.
///
/// Every edge `{a, b}` is stored in both adjacency lists, so the neighbor
/// relation is symmetric by construction. A self loop is stored once.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Hash lookup plus `Vec::push` |
/// | `add_edge` | \(O(\text{degree})\) | Checks for existence first |
/// | `contains` | \(O(1)\) expected | Hash lookup |
/// | `neighbors` | \(O(1)\) to start | Yields the stored adjacency list |
/// | `degree` | \(O(1)\) | returns `Vec::len` |
/// | `edge_count` | \(O(n + m)\) | Scans all adjacency lists |
///
/// ### Serialization
/// Serialized as `{ "nodes": [...], "edges": [[a, b], ...] }`. Deserializing
/// fails with [`GraphError::UnknownNode`] if an edge names an unlisted node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    into = "GraphRecord<N>",
    try_from = "GraphRecord<N>",
    bound(
        serialize = "N: Clone + Eq + Hash + Serialize",
        deserialize = "N: Clone + Eq + Hash + Deserialize<'de>"
    )
)]
pub struct AdjacencyGraph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Creates a graph from an edge list, adding endpoints as they appear.
    pub fn from_edges<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges_from(edges);
        graph
    }

    /// Adds `node` if absent.
    ///
    /// Returns `true` if the node was new.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.intern(node);
        true
    }

    /// Adds every node yielded by `nodes`.
    pub fn add_nodes_from<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Adds the undirected edge `{a, b}` if it is not already present.
    ///
    /// Missing endpoints are added first.
    pub fn add_edge(&mut self, a: N, b: N) {
        let u = self.intern(a);
        let v = self.intern(b);

        if self.adjacency[u].contains(&v) {
            return;
        }
        self.adjacency[u].push(v);
        if u != v {
            self.adjacency[v].push(u);
        }
    }

    /// Adds every edge yielded by `edges`.
    pub fn add_edges_from<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }

    /// Checks if the edge `{a, b}` exists.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&u), Some(&v)) => self.adjacency[u].contains(&v),
            _ => false,
        }
    }

    /// Returns the number of neighbors of `node`, or `None` if it is absent.
    ///
    /// A self loop counts once.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.index.get(node).map(|&u| self.adjacency[u].len())
    }

    /// Returns the number of undirected edges, counting each self loop once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, nbrs)| nbrs.iter().filter(|&&v| u <= v).count())
            .sum()
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Returns each undirected edge once, as `(a, b)` with `a` inserted no later than `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(u, nbrs)| {
            nbrs.iter()
                .filter(move |&&v| u <= v)
                .map(move |&v| (&self.nodes[u], &self.nodes[v]))
        })
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        idx
    }
}

impl AdjacencyGraph<usize> {
    /// Creates the complete graph on nodes `0..n`.
    ///
    /// Holds \(n(n-1)/2\) edges, so building it is \(O(n^2)\).
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::with_capacity(n);
        graph.add_nodes_from(0..n);
        graph.add_edges_from(all_pairs(n));
        graph
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the neighbors of one node of an [`AdjacencyGraph`].
pub struct AdjacencyNeighbors<'a, N> {
    nodes: &'a [N],
    iter: core::slice::Iter<'a, usize>,
}

impl<N: Clone> Iterator for AdjacencyNeighbors<'_, N> {
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        self.iter.next().map(|&v| self.nodes[v].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<N: Clone> ExactSizeIterator for AdjacencyNeighbors<'_, N> {}

impl<N: Clone + Eq + Hash> Graph for AdjacencyGraph<N> {
    type Node = N;
    type Neighbors<'a> = AdjacencyNeighbors<'a, N>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// # Panics
    /// Panics if `node` is not in the graph.
    fn neighbors(&self, node: &N) -> Self::Neighbors<'_> {
        let Some(&u) = self.index.get(node) else {
            panic!("neighbors requested for a node outside the graph");
        };
        AdjacencyNeighbors {
            nodes: &self.nodes,
            iter: self.adjacency[u].iter(),
        }
    }
}

/// Wire form of an [`AdjacencyGraph`].
#[derive(Serialize, Deserialize)]
struct GraphRecord<N> {
    nodes: Vec<N>,
    edges: Vec<(N, N)>,
}

impl<N: Clone + Eq + Hash> From<AdjacencyGraph<N>> for GraphRecord<N> {
    fn from(graph: AdjacencyGraph<N>) -> Self {
        let edges = graph.edges().map(|(a, b)| (a.clone(), b.clone())).collect();
        Self {
            nodes: graph.nodes,
            edges,
        }
    }
}

impl<N: Clone + Eq + Hash> TryFrom<GraphRecord<N>> for AdjacencyGraph<N> {
    type Error = GraphError;

    fn try_from(record: GraphRecord<N>) -> Result<Self, Self::Error> {
        let mut graph = Self::with_capacity(record.nodes.len());
        graph.add_nodes_from(record.nodes);
        for (edge, (a, b)) in record.edges.into_iter().enumerate() {
            if !graph.contains(&a) || !graph.contains(&b) {
                return Err(GraphError::UnknownNode { edge });
            }
            graph.add_edge(a, b);
        }
        Ok(graph)
    }
}
