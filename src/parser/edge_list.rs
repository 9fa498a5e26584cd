//! Parser for `go mod graph` edge lists.

use std::io::BufRead;

use crate::graph::ModuleGraph;

/// Errors that can occur while parsing an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read from the input (including invalid UTF-8).
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// A line did not hold exactly two tokens.
    #[error("Malformed record on line {line}: {content:?} (expected `<module> <dependency>`)")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// The offending line as read.
        content: String,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Splits a record into its module and dependency tokens.
///
/// Tokens are separated by any run of whitespace. Returns `None` unless the
/// line holds exactly two tokens.
///
/// # Example
///
/// ```
/// use modv::parser::split_record;
///
/// assert_eq!(split_record("a@v1\t b@v2\r"), Some(("a@v1", "b@v2")));
/// assert_eq!(split_record("a@v1"), None);
/// assert_eq!(split_record("a b c"), None);
/// ```
pub fn split_record(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(module), Some(dependency), None) => Some((module, dependency)),
        _ => None,
    }
}

/// Parses an edge list from a buffered reader, draining it.
///
/// # Errors
///
/// Returns [`ParseError::MalformedRecord`] at the first line that does not
/// hold exactly two tokens, and [`ParseError::IoError`] if reading fails.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<ModuleGraph> {
    let mut graph = ModuleGraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let (module, dependency) =
            split_record(&line).ok_or_else(|| ParseError::MalformedRecord {
                line: index + 1,
                content: line.clone(),
            })?;
        graph.add_dependency(module, dependency);
    }

    tracing::debug!(
        modules = graph.node_count(),
        edges = graph.edge_count(),
        "parsed dependency graph"
    );
    Ok(graph)
}

/// Parses an edge list held in memory.
///
/// # Example
///
/// ```
/// use modv::parser::parse_str;
///
/// let graph = parse_str("a@1 b@1\nb@1 c@1").unwrap();
/// assert_eq!(graph.node_count(), 3);
/// ```
pub fn parse_str(content: &str) -> ParseResult<ModuleGraph> {
    parse_reader(content.as_bytes())
}
