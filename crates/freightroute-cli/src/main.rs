use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use freightroute_lib::{
    convert_csv_file, load_network, plan_enumeration, plan_route, sample_network, Criterion,
    EnumerateRequest, EnumerationOutcome, EnumerationSummary, RenderMode, RouteOutcome,
    RouteRequest, RouteSummary, TransportGraph, DEFAULT_CUTOFF, DEFAULT_MAX_PATHS,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multimodal freight route planning utilities")]
struct Cli {
    /// Path to the network document (JSON). Uses the embedded sample network
    /// when omitted.
    #[arg(long)]
    network: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum CriterionArg {
    Time,
    Cost,
    Carbon,
    Transfers,
}

impl From<CriterionArg> for Criterion {
    fn from(value: CriterionArg) -> Self {
        match value {
            CriterionArg::Time => Criterion::Time,
            CriterionArg::Cost => Criterion::Cost,
            CriterionArg::Carbon => Criterion::Carbon,
            CriterionArg::Transfers => Criterion::Transfers,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the optimal route between two locations under one criterion.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Ranking criterion.
        #[arg(long, value_enum, default_value = "time")]
        criterion: CriterionArg,
    },
    /// Enumerate every distinct route between two locations.
    Paths {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Maximum number of edges per route.
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: usize,
        /// Keep at most this many routes, fastest first.
        #[arg(long, default_value_t = DEFAULT_MAX_PATHS)]
        max_paths: usize,
        /// Return every distinct route, ignoring --max-paths.
        #[arg(long)]
        all: bool,
    },
    /// List the locations available in the network.
    Nodes,
    /// Convert a legs CSV into the network document format.
    Convert {
        /// Input CSV with from,to,mode,time,cost,distance,carbon columns.
        #[arg(long)]
        input: PathBuf,
        /// Output path for the JSON network document.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            ref from,
            ref to,
            criterion,
        } => handle_route(
            cli.network.as_deref(),
            cli.format,
            from,
            to,
            criterion.into(),
        ),
        Command::Paths {
            ref from,
            ref to,
            cutoff,
            max_paths,
            all,
        } => {
            let cap = if all { None } else { Some(max_paths) };
            handle_paths(cli.network.as_deref(), cli.format, from, to, cutoff, cap)
        }
        Command::Nodes => handle_nodes(cli.network.as_deref()),
        Command::Convert {
            ref input,
            ref output,
        } => handle_convert(input, output),
    }
}

fn load_graph(path: Option<&Path>) -> Result<TransportGraph> {
    let graph = match path {
        Some(path) => load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display()))?,
        None => sample_network(),
    };
    tracing::debug!(nodes = graph.node_count(), "network ready");
    Ok(graph)
}

fn handle_route(
    network: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
    criterion: Criterion,
) -> Result<()> {
    let graph = load_graph(network)?;
    let request = RouteRequest::new(from, to, criterion);
    let outcome = plan_route(&graph, &request)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        RouteOutcome::Found(route) => {
            print!(
                "{}",
                RouteSummary::new(criterion, route).render(RenderMode::PlainText)
            );
        }
        RouteOutcome::SameNode => {
            println!("Start and destination are the same location.");
        }
        RouteOutcome::NoPath => {
            println!("No route found between {from} and {to}.");
        }
    }
    Ok(())
}

fn handle_paths(
    network: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
    cutoff: usize,
    max_paths: Option<usize>,
) -> Result<()> {
    let graph = load_graph(network)?;
    let request = EnumerateRequest::new(from, to)
        .with_cutoff(cutoff)
        .with_max_paths(max_paths);
    let outcome = plan_enumeration(&graph, &request)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        EnumerationOutcome::Paths(routes) => {
            print!(
                "{}",
                EnumerationSummary::new(routes).render(RenderMode::PlainText)
            );
        }
        EnumerationOutcome::NoPath => {
            println!("No route found between {from} and {to}.");
        }
    }
    Ok(())
}

fn handle_nodes(network: Option<&Path>) -> Result<()> {
    let graph = load_graph(network)?;
    for node in graph.nodes() {
        println!("{node}");
    }
    Ok(())
}

fn handle_convert(input: &Path, output: &Path) -> Result<()> {
    convert_csv_file(input, output)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    println!("Network document written to {}", output.display());
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
