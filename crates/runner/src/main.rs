pub mod config;
pub mod csv_loader;
pub mod error;
pub mod generator;
pub mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use csv_loader::CsvLoader;
use error::Error;
use generator::RandomGraphGenerator;
use sssp_core::{Graph, ShortestPaths};

/// Single-source shortest paths with negative cycle detection.
#[derive(Parser)]
#[command(name = "sssp-runner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./Config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source vertex, overriding the configured one
    #[arg(long, short, global = true)]
    source: Option<usize>,

    /// Suppress log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a `from,to,weight` CSV edge list
    Csv {
        /// Path to the CSV file
        path: PathBuf,

        /// Vertex count (defaults to the largest endpoint + 1)
        #[arg(long)]
        vertices: Option<usize>,
    },

    /// Generate a random graph
    Random {
        #[arg(long)]
        vertices: Option<usize>,

        #[arg(long)]
        edges: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.solver.source = source;
    }

    let graph = load_graph(cli.command, &mut config)?;
    let sp = ShortestPaths::new(&graph, config.solver.source)?;

    info!(
        source = config.solver.source,
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "running shortest paths"
    );

    print!("{}", report::render(&sp)?);
    Ok(())
}

fn load_graph(command: Commands, config: &mut Config) -> Result<Graph, Error> {
    match command {
        Commands::Csv { path, vertices } => CsvLoader::new(path, vertices).load(),
        Commands::Random {
            vertices,
            edges,
            seed,
        } => {
            let generator = &mut config.generator;
            if let Some(vertices) = vertices {
                generator.vertices = vertices;
            }
            if let Some(edges) = edges {
                generator.edges = edges;
            }
            if let Some(seed) = seed {
                generator.seed = seed;
            }
            RandomGraphGenerator::new(generator.clone()).generate()
        }
    }
}
