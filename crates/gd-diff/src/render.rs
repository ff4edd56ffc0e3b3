//! Graphviz DOT rendering of a graph diff.

use std::fmt;
use std::io;

use gd_graph::Graph;

use crate::diff::{Change, GraphDiff};
use crate::quote::Quoted;

/// Layout direction written into every rendered graph.
pub const RANKDIR: &str = "BT";

const INDENT: &str = "    ";

/// Display adapter that renders a [`GraphDiff`] as a DOT digraph.
///
/// Removed items are colored red, added items green, unchanged items carry
/// no attributes.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'d, 'a> {
    diff: &'d GraphDiff<'a>,
}

impl<'a> GraphDiff<'a> {
    pub fn dot(&self) -> Dot<'_, 'a> {
        Dot { diff: self }
    }
}

impl fmt::Display for Dot<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        writeln!(f, "  rankdir = {:?};", RANKDIR)?;
        writeln!(f)?;

        for entry in self.diff.nodes() {
            writeln!(
                f,
                "{INDENT}{}{};",
                Quoted(entry.item.as_bytes()),
                Attrs(entry.change)
            )?;
        }

        writeln!(f)?;

        for entry in self.diff.edges() {
            writeln!(
                f,
                "{INDENT}{} -> {}{};",
                Quoted(entry.item.source.as_bytes()),
                Quoted(entry.item.target.as_bytes()),
                Attrs(entry.change)
            )?;
        }

        writeln!(f, "}}")
    }
}

/// Attribute list for a change, including the leading space.
struct Attrs(Change);

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.color() {
            Some(color) => write!(f, " [color={color}]"),
            None => Ok(()),
        }
    }
}

/// Diff `old` against `new` and write the DOT rendering to `out`.
pub fn render_diff<W: io::Write>(old: &Graph, new: &Graph, mut out: W) -> io::Result<()> {
    write!(out, "{}", GraphDiff::new(old, new).dot())
}

/// Diff `old` against `new` and return the DOT rendering.
pub fn render_diff_to_string(old: &Graph, new: &Graph) -> String {
    GraphDiff::new(old, new).dot().to_string()
}
