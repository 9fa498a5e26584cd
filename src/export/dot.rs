//! Graphviz DOT export implementation.

use std::io::{self, Write};

use super::LayoutDirection;
use crate::graph::ModuleGraph;

/// Number of dependency-bearing modules above which the graph is laid out
/// left to right.
pub const HORIZONTAL_LAYOUT_THRESHOLD: usize = 15;

/// DOT exporter.
///
/// # Example
///
/// ```rust
/// use modv::export::DotExporter;
/// use modv::parser::parse_str;
///
/// let graph = parse_str("a@1 b@1\n").unwrap();
/// let mut output = Vec::new();
/// DotExporter::default().export(&graph, &mut output).unwrap();
///
/// let dot = String::from_utf8(output).unwrap();
/// assert!(dot.starts_with("digraph {"));
/// assert!(dot.contains("1 -> 2;"));
/// ```
#[derive(Debug, Clone)]
pub struct DotExporter {
    /// Switch to left-to-right layout when more than this many modules have
    /// dependencies.
    pub horizontal_threshold: usize,
    /// Graphviz shape applied to every node.
    pub node_shape: String,
}

impl Default for DotExporter {
    fn default() -> Self {
        Self {
            horizontal_threshold: HORIZONTAL_LAYOUT_THRESHOLD,
            node_shape: "box".to_string(),
        }
    }
}

impl DotExporter {
    /// Picks the layout direction for `graph`.
    pub fn direction(&self, graph: &ModuleGraph) -> LayoutDirection {
        if graph.edges().source_count() > self.horizontal_threshold {
            LayoutDirection::LeftToRight
        } else {
            LayoutDirection::TopToBottom
        }
    }

    /// Writes `graph` as a DOT document.
    pub fn export<W: Write>(&self, graph: &ModuleGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph {{")?;

        if let Some(rankdir) = self.direction(graph).rankdir() {
            writeln!(writer, "    rankdir={};", rankdir)?;
        }
        writeln!(writer, "    node [shape={}];", self.node_shape)?;

        for (id, label) in graph.nodes().iter() {
            writeln!(writer, "    {} [label=\"{}\"];", id, escape_label(label))?;
        }

        for (from, to) in graph.edges().iter() {
            writeln!(writer, "    {} -> {};", from, to)?;
        }

        writeln!(writer, "}}")
    }
}

/// Escapes a label for use inside a DOT quoted string.
///
/// Line breaks become the `\n` escape, which Graphviz renders as a centered
/// line break.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
