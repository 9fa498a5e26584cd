//! Parser module for modv.
//!
//! Reads the edge list printed by `go mod graph`: one
//! `<module> <dependency>` pair per line, where each side is a
//! `name@version` token (the main module carries no version).
//!
//! # Example
//!
//! ```rust
//! use modv::parser::parse_str;
//!
//! let graph = parse_str(
//!     "example.com/app golang.org/x/mod@v0.14.0\n\
//!      golang.org/x/mod@v0.14.0 golang.org/x/tools@v0.13.0\n",
//! )
//! .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod edge_list;

pub use edge_list::{parse_reader, parse_str, split_record, ParseError, ParseResult};
