use clap::Parser;
use gd_diff::GraphDiff;
use gd_graph::load_graph_file;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod error;

use error::{CliError, CliResult};

#[derive(Debug, Parser)]
#[command(name = "gd-cli")]
#[command(
    about = "Render the difference between two graph descriptions as Graphviz DOT",
    long_about = None
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the old graph description
    #[arg(allow_hyphen_values = true)]
    old: PathBuf,
    /// Path to the new graph description
    #[arg(allow_hyphen_values = true)]
    new: PathBuf,
}

fn main() {
    init_tracing();

    // Exits with status 2 and a usage message on a bad argument list.
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let old = load_graph_file(&cli.old)?;
    let new = load_graph_file(&cli.new)?;

    let diff = GraphDiff::new(&old, &new);
    let stats = diff.stats();
    debug!(
        nodes = stats.nodes.total(),
        edges = stats.edges.total(),
        nodes_added = stats.nodes.added,
        nodes_removed = stats.nodes.removed,
        edges_added = stats.edges.added,
        edges_removed = stats.edges.removed,
        "diff computed"
    );

    // Render fully before writing so a failure never leaves a partial graph.
    let dot = diff.dot().to_string();
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(dot.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(CliError::Output)
}
