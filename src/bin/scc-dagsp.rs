use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use scc_dagsp::data::DEFAULT_SEED;
use scc_dagsp::{analyze, AnalysisConfig, Dataset, DatasetGenerator};

/// Strongly connected components, condensation ordering and DAG paths
#[derive(Parser, Debug)]
#[command(name = "scc-dagsp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a JSON edge-list dataset and print the report
    Analyze {
        /// Dataset file
        file: PathBuf,
        /// Source vertex; defaults to the dataset's source
        #[arg(long)]
        source: Option<usize>,
        /// Target vertex; defaults to the end of the critical path
        #[arg(long)]
        target: Option<usize>,
        /// Reconstruct the shortest path instead of the longest one
        #[arg(long)]
        shortest: bool,
    },
    /// Write the nine standard datasets
    Generate {
        /// Output directory
        #[arg(long, default_value = "data")]
        out: PathBuf,
        /// Random seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Analyze {
            file,
            source,
            target,
            shortest,
        } => {
            let dataset = Dataset::load(&file)
                .with_context(|| format!("cannot load dataset {}", file.display()))?;
            let graph = dataset.to_graph()?;
            let config = AnalysisConfig::default()
                .with_source(source.unwrap_or_else(|| dataset.source()))
                .with_target(target)
                .with_longest(!shortest);

            println!("Loading graph from: {}", file.display());
            let report = analyze(&graph, &config)?;
            println!("{}", report);
        }
        Command::Generate { out, seed } => {
            let mut generator = DatasetGenerator::new(seed);
            let written = generator
                .write_standard_suite(&out)
                .with_context(|| format!("cannot write datasets into {}", out.display()))?;
            info!("Seed {} produced {} datasets", seed, written.len());
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
