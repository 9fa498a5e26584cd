use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modv::export::DotExporter;
use modv::{input, parser, usage};

#[derive(Parser)]
#[command(name = "modv")]
#[command(version)]
#[command(about = "Render `go mod graph` output as a Graphviz DOT document", long_about = None)]
struct Cli {
    /// Only show the dependencies of this module (name@version)
    focus: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the document.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modv=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result = input::ensure_piped_stdin()
        .context("Cannot read dependency graph")
        .and_then(|()| run(cli.focus.as_deref(), io::stdin().lock(), io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            eprint!("{}", usage::usage_hint());
            ExitCode::FAILURE
        }
    }
}

/// Parses the edge list from `input`, optionally filters it to the closure
/// of `focus`, and writes the DOT document to `output`.
///
/// Nothing is written unless parsing and filtering both succeed.
fn run<R: BufRead, W: Write>(focus: Option<&str>, input: R, output: W) -> anyhow::Result<()> {
    let graph = parser::parse_reader(input).context("Failed to parse dependency graph")?;

    let graph = match focus.map(str::trim).filter(|f| !f.is_empty()) {
        Some(focus) => graph
            .reachable_from(focus)
            .context("Failed to filter dependency graph")?,
        None => graph,
    };

    let exporter = DotExporter::default();
    tracing::debug!(
        modules = graph.node_count(),
        edges = graph.edge_count(),
        direction = %exporter.direction(&graph),
        "rendering dependency graph"
    );

    let mut out = BufWriter::new(output);
    exporter
        .export(&graph, &mut out)
        .and_then(|()| out.flush())
        .context("Failed to render dependency graph")?;
    Ok(())
}
