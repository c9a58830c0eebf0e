use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decentralization scoring for DeFi protocols — merges curated stage
/// assessments with live TVL figures from the DeFiLlama API.
#[derive(Parser)]
#[command(name = "defi-scan", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the curated protocol set with live TVL and print the board
    Projects {
        /// Path to the curated protocol JSON file
        #[arg(long, default_value = "content/protocols.json")]
        content: PathBuf,

        /// Write merged records as JSON to this file instead of a table
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Current TVL of a single protocol, by DeFiLlama slug
    Tvl {
        /// DeFiLlama protocol slug (e.g. "uniswap")
        slug: String,
    },

    /// Historical TVL across all chains
    History {
        /// Only keep points strictly after this unix timestamp
        /// (default: Jan 1, 2020)
        #[arg(long)]
        since: Option<i64>,

        /// Write the points as CSV to this file instead of a summary
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print a sample curated protocol JSON document to stdout
    Example,
}
