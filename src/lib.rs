//! modv - render Go module dependency graphs as Graphviz DOT documents
//!
//! This crate turns the edge list printed by `go mod graph` into a DOT
//! document, optionally restricted to the dependency closure of one module.

pub mod export;
pub mod graph;
pub mod input;
pub mod parser;
pub mod usage;
