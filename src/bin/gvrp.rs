//! GVRP instance reader.
//!
//! Parses each instance file given on the command line and prints the linked
//! instance. Files are processed independently: a file that fails to parse is
//! reported and the remaining files are still read.
//!
//! # Usage
//!
//! ```bash
//! gvrp data/A-n32-k5-C11-V2.gvrp
//! gvrp --depot-policy unique-unassigned -o json data/*.gvrp
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use u_gvrp::config::{DepotPolicy, InstanceConfig};
use u_gvrp::format::read_instance_file;
use u_gvrp::models::Instance;

#[derive(Parser)]
#[command(name = "gvrp")]
#[command(version)]
#[command(about = "Parses GVRP instance files and prints the linked instances")]
struct Cli {
    /// Instance files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Candidate neighbour set size
    #[arg(short, long, default_value_t = 20)]
    k: usize,

    /// Rule used to pick the depot among nodes without cluster
    #[arg(long, value_enum, default_value = "last-unassigned")]
    depot_policy: PolicyArg,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    LastUnassigned,
    UniqueUnassigned,
}

impl From<PolicyArg> for DepotPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::LastUnassigned => DepotPolicy::LastUnassigned,
            PolicyArg::UniqueUnassigned => DepotPolicy::UniqueUnassigned,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct InstanceSummary<'a> {
    file: String,
    name: &'a str,
    fleet_size: usize,
    vehicle_capacity: i32,
    k: usize,
    depot: NodeSummary,
    nodes: usize,
    customers: usize,
    clusters: Vec<ClusterSummary>,
}

#[derive(Serialize)]
struct NodeSummary {
    id: usize,
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct ClusterSummary {
    id: usize,
    demand: i32,
    members: Vec<usize>,
}

impl<'a> InstanceSummary<'a> {
    fn new(path: &Path, instance: &'a Instance) -> Self {
        let depot = instance.depot();
        Self {
            file: path.display().to_string(),
            name: instance.name(),
            fleet_size: instance.fleet_size(),
            vehicle_capacity: instance.vehicle_capacity(),
            k: instance.k(),
            depot: NodeSummary {
                id: depot.id(),
                x: depot.x(),
                y: depot.y(),
            },
            nodes: instance.num_nodes(),
            customers: instance.customers().len(),
            clusters: instance
                .clusters()
                .iter()
                .map(|c| ClusterSummary {
                    id: c.id(),
                    demand: c.demand(),
                    members: c.members().iter().map(|n| n.id()).collect(),
                })
                .collect(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = InstanceConfig::default()
        .with_k(cli.k)
        .with_depot_policy(cli.depot_policy.into());

    let mut failed = 0;
    for path in &cli.files {
        match run_file(path, &config, cli.format) {
            Ok(output) => println!("{output}"),
            Err(message) => {
                tracing::error!(file = %path.display(), "{message}");
                eprintln!("{}: {message}", path.display());
                failed += 1;
            }
        }
    }

    tracing::info!(files = cli.files.len(), failed, "done");
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_file(path: &Path, config: &InstanceConfig, format: OutputFormat) -> Result<String, String> {
    let instance = read_instance_file(path, config).map_err(|e| e.to_string())?;
    match format {
        OutputFormat::Text => Ok(format!("{}\n{instance}", path.display())),
        OutputFormat::Json => serde_json::to_string_pretty(&InstanceSummary::new(path, &instance))
            .map_err(|e| e.to_string()),
    }
}
