use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Undirected connection between two nodes, referenced by index.
///
/// Equality and hashing ignore endpoint order: `(2, 5) == (5, 2)`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The same edge with the smaller index first.
    pub fn canonical(&self) -> Self {
        Self {
            a: self.a.min(self.b),
            b: self.a.max(self.b),
        }
    }

    /// Endpoint opposite `node`, or None if the edge does not touch it.
    /// A self-loop has no opposite endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        match (self.a == node, self.b == node) {
            (true, false) => Some(self.b),
            (false, true) => Some(self.a),
            _ => None,
        }
    }

    /// Clamp both endpoints into `[0, node_count - 1]`.
    /// Returns None when there are no nodes to clamp into.
    pub fn clamped(&self, node_count: usize) -> Option<Self> {
        let last = node_count.checked_sub(1)?;
        Some(Self::new(self.a.min(last), self.b.min(last)))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let c = self.canonical();
        c.a.hash(state);
        c.b.hash(state);
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
