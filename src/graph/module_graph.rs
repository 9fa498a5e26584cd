//! Module graph storage.
//!
//! A [`ModuleGraph`] pairs a [`NodeTable`] (label ↔ id) with an [`EdgeSet`]
//! (id → ordered dependency ids). Both are append-only while parsing and
//! read-only afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Identifier of a module within one [`ModuleGraph`].
///
/// Ids are positive and handed out in first-seen order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Returns the raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes a raw `name@version` token into a node label.
///
/// Surrounding whitespace is stripped and the first `@` becomes a line
/// break, so the caption renders as name over version.
///
/// # Example
///
/// ```rust
/// use modv::graph::module_label;
///
/// assert_eq!(module_label(" golang.org/x/mod@v0.14.0 "), "golang.org/x/mod\nv0.14.0");
/// assert_eq!(module_label("example.com/app"), "example.com/app");
/// ```
pub fn module_label(raw: &str) -> String {
    raw.trim().replacen('@', "\n", 1)
}

/// Bidirectional mapping between module labels and their ids.
#[derive(Debug, Clone)]
pub struct NodeTable {
    ids: HashMap<String, ModuleId>,
    labels: BTreeMap<ModuleId, String>,
    next_id: u32,
}

impl Default for NodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTable {
    /// Creates an empty table whose first allocated id is 1.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            labels: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns the id for `label`, allocating the next one if unseen.
    pub fn intern(&mut self, label: &str) -> ModuleId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }

        let id = ModuleId(self.next_id);
        self.next_id += 1;
        self.ids.insert(label.to_string(), id);
        self.labels.insert(id, label.to_string());
        id
    }

    /// Looks up the id of an already interned label.
    pub fn id_of(&self, label: &str) -> Option<ModuleId> {
        self.ids.get(label).copied()
    }

    /// Looks up the label of an id.
    pub fn label_of(&self, id: ModuleId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Iterates `(id, label)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &str)> + '_ {
        self.labels.iter().map(|(&id, label)| (id, label.as_str()))
    }

    /// Iterates ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.labels.keys().copied()
    }

    /// Number of interned labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no label has been interned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Copies the entries whose ids are in `keep`.
    ///
    /// The allocation counter is carried over so a later `intern` on the
    /// copy cannot collide with ids of the original table.
    pub(crate) fn subset(&self, keep: &BTreeSet<ModuleId>) -> Self {
        let mut table = Self {
            ids: HashMap::with_capacity(keep.len()),
            labels: BTreeMap::new(),
            next_id: self.next_id,
        };
        for &id in keep {
            if let Some(label) = self.labels.get(&id) {
                table.ids.insert(label.clone(), id);
                table.labels.insert(id, label.clone());
            }
        }
        table
    }
}

/// Adjacency lists keyed by source id.
///
/// Destinations keep declaration order and multiplicity.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    adjacency: BTreeMap<ModuleId, Vec<ModuleId>>,
}

impl EdgeSet {
    /// Appends `to` to the adjacency list of `from`.
    pub fn push(&mut self, from: ModuleId, to: ModuleId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Returns the dependencies of `id` in declaration order.
    pub fn dependencies_of(&self, id: ModuleId) -> &[ModuleId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(source, destination)` pairs: sources ascending, then each
    /// destination list in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, ModuleId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Number of distinct sources with at least one outgoing edge.
    pub fn source_count(&self) -> usize {
        self.adjacency.values().filter(|t| !t.is_empty()).count()
    }

    /// Total number of stored edges, duplicates included.
    pub fn len(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if no edge is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the adjacency lists of the sources in `keep`, verbatim.
    pub(crate) fn subset(&self, keep: &BTreeSet<ModuleId>) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(id, targets)| keep.contains(*id) && !targets.is_empty())
            .map(|(&id, targets)| (id, targets.clone()))
            .collect();
        Self { adjacency }
    }
}

/// A module dependency graph.
///
/// # Example
///
/// ```rust
/// use modv::graph::ModuleGraph;
///
/// let mut graph = ModuleGraph::new();
/// graph.add_dependency("example.com/app", "golang.org/x/mod@v0.14.0");
/// graph.add_dependency("golang.org/x/mod@v0.14.0", "golang.org/x/tools@v0.13.0");
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains("golang.org/x/mod@v0.14.0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    nodes: NodeTable,
    edges: EdgeSet,
}

impl ModuleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(nodes: NodeTable, edges: EdgeSet) -> Self {
        Self { nodes, edges }
    }

    /// Records that `module` depends on `dependency`.
    ///
    /// Both arguments are raw `name@version` tokens; they are normalized with
    /// [`module_label`]. The source is interned before the destination.
    pub fn add_dependency(&mut self, module: &str, dependency: &str) -> (ModuleId, ModuleId) {
        let from = self.nodes.intern(&module_label(module));
        let to = self.nodes.intern(&module_label(dependency));
        self.edges.push(from, to);
        (from, to)
    }

    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
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

    /// Returns true if the raw `name@version` token names a node.
    pub fn contains(&self, module: &str) -> bool {
        self.id_of(module).is_some()
    }

    /// Looks up a node by raw `name@version` token.
    pub fn id_of(&self, module: &str) -> Option<ModuleId> {
        self.nodes.id_of(&module_label(module))
    }

    /// Returns the (two-line) caption of a node.
    pub fn label_of(&self, id: ModuleId) -> Option<&str> {
        self.nodes.label_of(id)
    }

    pub fn dependencies_of(&self, id: ModuleId) -> &[ModuleId] {
        self.edges.dependencies_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &ModuleGraph, labels: &[&str]) -> Vec<ModuleId> {
        labels.iter().map(|l| graph.id_of(l).unwrap()).collect()
    }

    #[test]
    fn test_create_empty_graph() {
        let graph = ModuleGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().source_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_module_label_replaces_first_at_only() {
        assert_eq!(module_label("a@1"), "a\n1");
        assert_eq!(module_label("a@1@2"), "a\n1@2");
        assert_eq!(module_label("plain"), "plain");
        assert_eq!(module_label("\tpadded@v1 "), "padded\nv1");
    }

    #[test]
    fn test_ids_follow_first_occurrence() {
        let mut graph = ModuleGraph::new();
        graph.add_dependency("b@1", "a@1");
        graph.add_dependency("c@1", "b@1");

        let got: Vec<u32> = ids(&graph, &["b@1", "a@1", "c@1"])
            .into_iter()
            .map(ModuleId::get)
            .collect();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut table = NodeTable::new();
        let first = table.intern("x");
        let again = table.intern("x");
        assert_eq!(first, again);
        assert_eq!(table.len(), 1);
        assert_eq!(table.label_of(first), Some("x"));
    }

    #[test]
    fn test_duplicate_edges_are_kept_in_order() {
        let mut graph = ModuleGraph::new();
        graph.add_dependency("a", "b");
        graph.add_dependency("a", "c");
        graph.add_dependency("a", "b");

        let found = ids(&graph, &["a", "b", "c"]);
        let (a, b, c) = (found[0], found[1], found[2]);
        assert_eq!(graph.dependencies_of(a), &[b, c, b]);
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.edges().is_empty());
        assert_eq!(graph.edges().source_count(), 1);
    }

    #[test]
    fn test_edge_iteration_order() {
        let mut graph = ModuleGraph::new();
        graph.add_dependency("b", "c");
        graph.add_dependency("a", "b");
        graph.add_dependency("b", "a");

        let pairs: Vec<(u32, u32)> = graph
            .edges()
            .iter()
            .map(|(from, to)| (from.get(), to.get()))
            .collect();
        // b=1, c=2, a=3
        assert_eq!(pairs, vec![(1, 2), (1, 3), (3, 1)]);
    }

    #[test]
    fn test_lookup_by_raw_token() {
        let mut graph = ModuleGraph::new();
        graph.add_dependency("app", "lib@v1.2.0");

        let id = graph.id_of("lib@v1.2.0").unwrap();
        assert_eq!(graph.label_of(id), Some("lib\nv1.2.0"));
        assert!(graph.contains(" lib@v1.2.0 "));
        assert!(!graph.contains("lib@v1.3.0"));
        assert!(graph.dependencies_of(id).is_empty());
    }

    #[test]
    fn test_subset_keeps_counter() {
        let mut table = NodeTable::new();
        let a = table.intern("a");
        table.intern("b");
        let keep: BTreeSet<_> = [a].into_iter().collect();

        let mut copy = table.subset(&keep);
        assert_eq!(copy.len(), 1);
        assert_eq!(copy.id_of("b"), None);
        assert_eq!(copy.intern("c").get(), 3);
    }

    #[test]
    fn test_module_id_display() {
        let mut table = NodeTable::new();
        let id = table.intern("a");
        assert_eq!(id.to_string(), "1");
    }
}
