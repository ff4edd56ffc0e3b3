//! gd-diff: diff two graph snapshots and render the result as Graphviz DOT.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gd_graph::load_graph;
//! use gd_diff::render_diff_to_string;
//!
//! let old = load_graph(Cursor::new("A - a\nB - b\n  A - x\n")).unwrap();
//! let new = load_graph(Cursor::new("A - a\nC - c\n  A - x\n")).unwrap();
//!
//! let dot = render_diff_to_string(&old, &new);
//! assert!(dot.contains("\"B\" [color=red];"));
//! assert!(dot.contains("\"C\" -> \"A\" [color=green];"));
//! ```

pub mod diff;
pub mod quote;
pub mod render;

pub use diff::{Change, ChangeCounts, DiffEntry, DiffStats, GraphDiff};
pub use quote::Quoted;
pub use render::{Dot, render_diff, render_diff_to_string};
