//! Graph module for module dependency relationships.
//!
//! This module provides the [`ModuleGraph`] struct built by the parser and
//! consumed by the exporter, plus reachability filtering via
//! [`ModuleGraph::reachable_from`].
//!
//! # Example
//!
//! ```rust
//! use modv::graph::ModuleGraph;
//!
//! let mut graph = ModuleGraph::new();
//! graph.add_dependency("example.com/app", "golang.org/x/text@v0.14.0");
//! graph.add_dependency("golang.org/x/text@v0.14.0", "golang.org/x/tools@v0.6.0");
//!
//! let closure = graph.reachable_from("golang.org/x/text@v0.14.0").unwrap();
//! assert_eq!(closure.node_count(), 2);
//! assert_eq!(closure.edge_count(), 1);
//! ```

mod filter;
mod module_graph;

pub use filter::FilterError;
pub use module_graph::{module_label, EdgeSet, ModuleGraph, ModuleId, NodeTable};
