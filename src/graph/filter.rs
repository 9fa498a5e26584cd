//! Reachability filtering.
//!
//! Restricts a [`ModuleGraph`] to the dependency closure of one module.

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;
use std::collections::BTreeSet;

use super::module_graph::{module_label, ModuleGraph, ModuleId};

/// Errors raised while filtering a graph.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The focus module does not appear in the graph.
    #[error("package {0} not existed")]
    UnknownPackage(String),
}

impl ModuleGraph {
    /// Returns the subgraph reachable from `focus`, the focus module included.
    ///
    /// `focus` is a raw `name@version` token. The original graph is left
    /// untouched; every retained node keeps its id, label and full adjacency
    /// list.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownPackage`] if `focus` names no node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modv::parser::parse_str;
    ///
    /// let graph = parse_str("a@1 b@1\nb@1 c@1\n").unwrap();
    ///
    /// let from_b = graph.reachable_from("b@1").unwrap();
    /// assert_eq!(from_b.node_count(), 2);
    /// assert_eq!(from_b.edge_count(), 1);
    ///
    /// assert!(graph.reachable_from("z@1").is_err());
    /// ```
    pub fn reachable_from(&self, focus: &str) -> Result<ModuleGraph, FilterError> {
        let start = self
            .nodes()
            .id_of(&module_label(focus))
            .ok_or_else(|| FilterError::UnknownPackage(focus.trim().to_string()))?;

        let visited = self.reachable_ids(start);
        tracing::debug!(
            focus = %start,
            retained = visited.len(),
            total = self.node_count(),
            "filtered dependency graph"
        );

        Ok(ModuleGraph::from_parts(
            self.nodes().subset(&visited),
            self.edges().subset(&visited),
        ))
    }

    /// Breadth-first walk from `start`; each node is discovered once, so
    /// cycles terminate.
    fn reachable_ids(&self, start: ModuleId) -> BTreeSet<ModuleId> {
        let mut view: DiGraphMap<ModuleId, ()> =
            DiGraphMap::with_capacity(self.node_count(), self.edge_count());
        for id in self.nodes().ids() {
            view.add_node(id);
        }
        for (from, to) in self.edges().iter() {
            view.add_edge(from, to, ());
        }

        let mut visited = BTreeSet::new();
        let mut bfs = Bfs::new(&view, start);
        while let Some(id) = bfs.next(&view) {
            visited.insert(id);
        }
        visited
    }
}
