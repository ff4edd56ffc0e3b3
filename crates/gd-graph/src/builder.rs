//! Incremental graph builder.

use std::collections::BTreeSet;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph, Name};

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph,
/// then call `build()` to freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeSet<Name>,
    edges: BTreeSet<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, name: impl Into<Name>) -> bool {
        self.nodes.insert(name.into())
    }

    /// Add an edge between two already-declared nodes.
    ///
    /// Returns `Ok(false)` if the edge was already present.
    pub fn add_edge(
        &mut self,
        source: impl Into<Name>,
        target: impl Into<Name>,
    ) -> GraphResult<bool> {
        let edge = Edge::new(source, target);
        for name in [&edge.source, &edge.target] {
            if !self.nodes.contains(name) {
                return Err(GraphError::UnknownNode { name: name.clone() });
            }
        }
        Ok(self.edges.insert(edge))
    }

    /// Freeze the builder into an immutable `Graph`.
    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_node("A"));
        assert!(builder.add_node("B"));
        assert!(!builder.add_node("A"));
        assert!(builder.add_edge("A", "B").unwrap());
        assert!(!builder.add_edge("A", "B").unwrap());

        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_rejects_unknown_target() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        let err = builder.add_edge("A", "B").unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { name: "B".into() });
        assert!(builder.edges.is_empty());
    }

    #[test]
    fn builder_rejects_unknown_source() {
        let mut builder = GraphBuilder::new();
        builder.add_node("B");
        let err = builder.add_edge("A", "B").unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { name: "A".into() });
    }

    #[test]
    fn builder_allows_self_loop() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        assert!(builder.add_edge("A", "A").unwrap());
        let graph = builder.build();
        assert!(graph.contains_edge(&Edge::new("A", "A")));
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        builder.add_node("N1");
        builder.add_node("N2");
        builder.add_edge("N1", "N2").unwrap();

        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node("N1"));
        assert!(!graph.contains_node("N3"));
    }
}
