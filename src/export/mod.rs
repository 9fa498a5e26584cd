//! Export functionality for module dependency graphs.
//!
//! Graphs are written as Graphviz DOT documents, meant to be piped into
//! `dot` for layout and rendering.

pub mod dot;

pub use dot::{DotExporter, HORIZONTAL_LAYOUT_THRESHOLD};

use crate::graph::ModuleGraph;
use std::io;

/// Layout direction hint carried by the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Graphviz default, ranks flow downwards
    #[default]
    TopToBottom,
    /// Ranks flow rightwards; easier to read for wide graphs
    LeftToRight,
}

impl LayoutDirection {
    /// The `rankdir` value to emit, if any.
    pub fn rankdir(self) -> Option<&'static str> {
        match self {
            LayoutDirection::TopToBottom => None,
            LayoutDirection::LeftToRight => Some("LR"),
        }
    }
}

impl std::fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutDirection::TopToBottom => write!(f, "top-to-bottom"),
            LayoutDirection::LeftToRight => write!(f, "left-to-right"),
        }
    }
}

/// Export a graph to a DOT string with the default settings.
pub fn export_to_string(graph: &ModuleGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    DotExporter::default().export(graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
