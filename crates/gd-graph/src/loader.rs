//! Line-oriented graph description loader.
//!
//! Each line is `NAME - free text`. A name with no indentation declares a
//! node; a name indented by at least two spaces declares an edge from the
//! most recently declared node to the (trimmed) named target:
//!
//! ```text
//! Parser - reads tokens
//!   Lexer - uses
//! ```
//!
//! Lines without the `" - "` separator are ignored. Names are kept as raw
//! bytes, so two names differing only in invalid UTF-8 stay distinct.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::builder::GraphBuilder;
use crate::error::{GraphError, LoadError, LoadResult};
use crate::graph::{Graph, Name};

/// Separator between the declared name and free-form annotation text.
pub const SEPARATOR: &[u8] = b" - ";

/// Indentation that marks an edge line.
pub const EDGE_INDENT: &[u8] = b"  ";

/// Classification of a single input line.
///
/// Names are raw bytes; input need not be valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Declares a node with this exact name.
    Node(&'a [u8]),
    /// Declares an edge from the latest node to this target.
    Edge(&'a [u8]),
    /// No separator; not part of the graph.
    Ignored,
}

/// Classify one line (without its line terminator).
pub fn classify_line(line: &[u8]) -> LineKind<'_> {
    let Some(split) = line
        .windows(SEPARATOR.len())
        .position(|window| window == SEPARATOR)
    else {
        return LineKind::Ignored;
    };
    let name = &line[..split];
    if name.starts_with(EDGE_INDENT) {
        LineKind::Edge(trim_space(name))
    } else {
        LineKind::Node(name)
    }
}

/// Counters collected while loading one graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines: usize,
    pub ignored_lines: usize,
    pub skipped_edges: usize,
}

/// Load a graph from a buffered reader.
pub fn load_graph<R: BufRead>(reader: R) -> LoadResult<Graph> {
    load_graph_with_report(reader).map(|(graph, _)| graph)
}

/// Load a graph and return the scan counters alongside it.
///
/// Edges whose target has not been declared earlier in the stream are
/// dropped with a warning. Read failures abort the load.
pub fn load_graph_with_report<R: BufRead>(mut reader: R) -> LoadResult<(Graph, LoadReport)> {
    let mut builder = GraphBuilder::new();
    let mut report = LoadReport::default();
    let mut latest: Option<Name> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines += 1;
        match classify_line(strip_line_ending(&buf)) {
            LineKind::Ignored => report.ignored_lines += 1,
            LineKind::Node(name) => {
                builder.add_node(name);
                latest = Some(Name::from(name));
            }
            LineKind::Edge(target) => {
                let added = match latest.as_ref() {
                    Some(source) => builder.add_edge(source.clone(), target),
                    None => Err(GraphError::MissingSource {
                        target: Name::from(target),
                    }),
                };
                if let Err(err) = added {
                    warn!(line = report.lines, "{err}");
                    report.skipped_edges += 1;
                }
            }
        }
    }

    let graph = builder.build();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped_edges = report.skipped_edges,
        ignored_lines = report.ignored_lines,
        "graph loaded"
    );
    Ok((graph, report))
}

/// Open `path` and load the graph it describes.
///
/// The file is closed before this returns, on success or failure.
pub fn load_graph_file(path: &Path) -> LoadResult<Graph> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading graph");
    load_graph(BufReader::new(file)).map_err(|err| err.with_path(path.to_path_buf()))
}

/// ASCII whitespace, including vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim_space(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
