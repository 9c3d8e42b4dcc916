//! Depth-first traversal and connectivity over any [`Graph`].
//!
//! All traversals here share one explicit-stack loop (no recursion, so deep
//! graphs cannot exhaust the call stack):
//!
//! 1. seed the stack with the start node
//! 2. pop a node; skip it if already visited
//! 3. otherwise mark it visited and push its neighbors
//!
//! Under [`PushPolicy::Lazy`] step 3 pushes every neighbor, so a node may sit on
//! the stack several times before it is first popped. Each undirected edge is
//! then examined at most twice, once from each endpoint, for a total of
//! \(O(n + m)\).

use std::collections::HashSet;

use super::Graph;

/// Controls which neighbors are pushed onto the frontier stack.
///
/// Both policies visit exactly the same set of nodes; they differ only in how
/// much duplicate work lands on the stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PushPolicy {
    /// Push every neighbor; discard duplicates when they are popped.
    #[default]
    Lazy,
    /// Push a neighbor only the first time it is discovered.
    SeenOrQueued,
}

/// Counters collected while a [`Dfs`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Distinct nodes visited so far.
    pub visited: usize,
    /// Nodes pushed onto the frontier stack, including the start node.
    pub pushes: usize,
    /// Nodes popped from the frontier stack, including discarded duplicates.
    pub pops: usize,
}

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields nodes in DFS pre-order. It owns its visited set and
/// its stack; both are dropped with the iterator. A start node that is not in
/// the graph yields nothing.
pub struct Dfs<'g, G: Graph + ?Sized> {
    graph: &'g G,
    policy: PushPolicy,
    visited: HashSet<G::Node>,
    // Nodes ever pushed. Only maintained under `SeenOrQueued`.
    queued: HashSet<G::Node>,
    stack: Vec<G::Node>,
    stats: TraversalStats,
}

impl<'g, G: Graph + ?Sized> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start` with [`PushPolicy::Lazy`].
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self::with_policy(graph, start, PushPolicy::Lazy)
    }

    /// Creates a new DFS iterator starting from `start` with the given policy.
    pub fn with_policy(graph: &'g G, start: G::Node, policy: PushPolicy) -> Self {
        let mut dfs = Self {
            graph,
            policy,
            visited: HashSet::new(),
            queued: HashSet::new(),
            stack: Vec::new(),
            stats: TraversalStats::default(),
        };

        if graph.contains(&start) {
            if policy == PushPolicy::SeenOrQueued {
                dfs.queued.insert(start.clone());
            }
            dfs.stack.push(start);
            dfs.stats.pushes = 1;
        }

        dfs
    }

    /// Returns the counters collected so far.
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Returns the nodes visited so far.
    pub fn visited(&self) -> &HashSet<G::Node> {
        &self.visited
    }

    /// Runs the traversal to completion and returns every visited node.
    pub fn into_visited(mut self) -> HashSet<G::Node> {
        for _ in self.by_ref() {}
        self.visited
    }

    fn push_neighbors(&mut self, node: &G::Node) {
        let graph = self.graph;
        for neighbor in graph.neighbors(node) {
            if self.policy == PushPolicy::SeenOrQueued && !self.queued.insert(neighbor.clone()) {
                continue;
            }
            self.stack.push(neighbor);
            self.stats.pushes += 1;
        }
    }
}

impl<G: Graph + ?Sized> Iterator for Dfs<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            self.stats.pops += 1;

            if self.visited.insert(node.clone()) {
                self.stats.visited += 1;
                self.push_neighbors(&node);
                return Some(node);
            }
        }
    }
}

/// Returns `true` if every node of `graph` is reachable from `start`.
///
/// Returns `false` without traversing when `start` is not a node of `graph`,
/// which includes every start node of an empty graph.
///
/// ```rust
/// use asymptote::{is_connected, AdjacencyGraph};
///
/// let g = AdjacencyGraph::complete(3);
/// assert!(is_connected(&g, &0));
/// assert!(!is_connected(&g, &3));
/// ```
pub fn is_connected<G: Graph + ?Sized>(graph: &G, start: &G::Node) -> bool {
    is_connected_with(graph, start, PushPolicy::Lazy)
}

/// Like [`is_connected`], with an explicit [`PushPolicy`].
///
/// The result does not depend on `policy`.
pub fn is_connected_with<G: Graph + ?Sized>(graph: &G, start: &G::Node, policy: PushPolicy) -> bool {
    if !graph.contains(start) {
        return false;
    }

    let mut dfs = Dfs::with_policy(graph, start.clone(), policy);
    for _ in dfs.by_ref() {}
    let stats = dfs.stats();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        visited = stats.visited,
        pushes = stats.pushes,
        pops = stats.pops,
        nodes = graph.node_count(),
        ?policy,
        "connectivity traversal finished"
    );

    stats.visited == graph.node_count()
}

/// Returns the set of nodes reachable from `start`, including `start` itself.
///
/// The set is empty when `start` is not a node of `graph`.
pub fn reachable_from<G: Graph + ?Sized>(graph: &G, start: &G::Node) -> HashSet<G::Node> {
    Dfs::new(graph, start.clone()).into_visited()
}
