//! Node/edge graph and its normalization.

use crate::{validate_nodes, Edge, InfluenceNode, Result, TerrainPaintError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Normalize a raw edge list.
///
/// Endpoints are clamped into the node range, self-loops dropped, edges
/// canonicalized (smaller index first), duplicates removed keeping the first
/// occurrence, and the result stably sorted by first index. Idempotent.
///
/// Clamping can turn an out-of-range edge into a different in-range one:
/// with 4 nodes, `(1, 9)` becomes `(1, 3)`.
pub fn cleanup_edges(edges: &[Edge], node_count: usize) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(edges.len());
    let mut cleaned: Vec<Edge> = edges
        .iter()
        .filter_map(|edge| edge.clamped(node_count))
        .filter(|edge| !edge.is_self_loop())
        .map(|edge| edge.canonical())
        .filter(|edge| seen.insert(*edge))
        .collect();

    cleaned.sort_by_key(|edge| edge.a);
    cleaned
}

/// Every node sharing an edge with `node`.
pub fn neighbors(node: usize, edges: &[Edge]) -> BTreeSet<usize> {
    edges.iter().filter_map(|edge| edge.other(node)).collect()
}

/// Number of distinct neighbors of `node`.
pub fn degree(node: usize, edges: &[Edge]) -> usize {
    neighbors(node, edges).len()
}

/// Neighbor sets for all `node_count` nodes, built in one pass over the edges.
/// Edges pointing outside the node range are ignored.
pub fn adjacency(node_count: usize, edges: &[Edge]) -> Vec<BTreeSet<usize>> {
    let mut adjacency = vec![BTreeSet::new(); node_count];
    for edge in edges {
        if edge.is_self_loop() || edge.a >= node_count || edge.b >= node_count {
            continue;
        }
        adjacency[edge.a].insert(edge.b);
        adjacency[edge.b].insert(edge.a);
    }
    adjacency
}

/// Check that every edge endpoint names an existing node.
pub fn check_edge_indices(edges: &[Edge], node_count: usize) -> Result<()> {
    match edges
        .iter()
        .flat_map(|edge| [edge.a, edge.b])
        .find(|&index| index >= node_count)
    {
        Some(index) => Err(TerrainPaintError::EdgeOutOfRange { index, node_count }),
        None => Ok(()),
    }
}

/// Influence nodes together with the connections between them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<InfluenceNode>,
    pub edges: Vec<Edge>,
}

impl GraphModel {
    pub fn new(nodes: Vec<InfluenceNode>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node and return its index.
    pub fn add_node(&mut self, node: InfluenceNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Add a raw edge. No normalization happens until [`GraphModel::cleanup`].
    pub fn connect(&mut self, a: usize, b: usize) {
        self.edges.push(Edge::new(a, b));
    }

    /// Normalize the edge list in place. See [`cleanup_edges`].
    pub fn cleanup(&mut self) {
        let before = self.edges.len();
        self.edges = cleanup_edges(&self.edges, self.nodes.len());
        if self.edges.len() != before {
            log::debug!(
                "Graph cleanup removed {} of {} edges",
                before - self.edges.len(),
                before
            );
        }
    }

    pub fn neighbors(&self, node: usize) -> BTreeSet<usize> {
        neighbors(node, &self.edges)
    }

    pub fn degree(&self, node: usize) -> usize {
        degree(node, &self.edges)
    }

    /// Check node preconditions and edge indices.
    pub fn validate(&self) -> Result<()> {
        validate_nodes(&self.nodes)?;
        check_edge_indices(&self.edges, self.nodes.len())
    }
}
