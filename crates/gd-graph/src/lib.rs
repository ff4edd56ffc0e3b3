//! gd-graph: graph model and loader for graphdiff.
//!
//! Provides:
//! - The immutable `Graph` value (node names + directed edges)
//! - An incremental builder that rejects edges to unknown nodes
//! - The line-oriented loader for graph description files
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gd_graph::{Edge, load_graph};
//!
//! let text = "App - entry point\nCore - shared code\n  App - called by\n";
//! let graph = load_graph(Cursor::new(text)).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert!(graph.contains_edge(&Edge::new("Core", "App")));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod loader;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult, LoadError, LoadResult};
pub use graph::{Edge, Graph, Name};
pub use loader::{
    LineKind, LoadReport, classify_line, load_graph, load_graph_file, load_graph_with_report,
};
