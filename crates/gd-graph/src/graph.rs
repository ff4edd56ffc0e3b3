//! Core graph data structures.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A node name, kept byte-for-byte as it appeared in the input.
///
/// Names need not be valid UTF-8. Ordering is byte-wise.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Vec<u8>);

impl Name {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for Name {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Name {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Lossy for display only; invalid bytes show as U+FFFD.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A directed edge between two named nodes.
///
/// Ordering is by source, then target, using byte-wise comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: Name,
    pub target: Name,
}

impl Edge {
    pub fn new(source: impl Into<Name>, target: impl Into<Name>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// The graph: an immutable set of node names and the edges between them.
///
/// Every edge endpoint is a member of `nodes`. Both sets iterate in
/// ascending byte-wise order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) nodes: BTreeSet<Name>,
    pub(crate) edges: BTreeSet<Edge>,
}

impl Graph {
    /// Return all node names.
    pub fn nodes(&self) -> &BTreeSet<Name> {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn contains_node(&self, name: impl AsRef<[u8]>) -> bool {
        self.nodes.contains(name.as_ref())
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
