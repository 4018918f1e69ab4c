//! Command-line interface for soft-compare.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Run the substring pipeline on two strings and rate them
//! - **rate**: Word-level rating with optional reference-document statistics
//! - **frequencies**: Build and print a word frequency table from a document
//!
//! ## Usage
//!
//! ```text
//! # Rate two strings by their common substrings
//! soft-compare compare "kitten" "sitting"
//!
//! # Show the run-length matrix and the alignment
//! soft-compare compare "kitten" "sitting" --show-matrix --show-alignment
//!
//! # Word-level rating against a reference document
//! soft-compare rate "the cat sat" "a cat sat down" --document corpus.txt
//!
//! # JSON output for scripting
//! soft-compare compare "kitten" "sitting" --format json
//!
//! # Inspect a document's word counts
//! soft-compare frequencies corpus.txt --top 20
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod frequencies;
pub mod rate;

#[derive(Parser)]
#[command(name = "soft-compare")]
#[command(version)]
#[command(about = "Soft similarity scoring for text strings")]
#[command(
    long_about = "soft-compare scores how similar two text strings are.\n\nIt finds the substrings the strings have in common, weights them by length, and can rate whole phrases word by word, up-weighting words that are rare in a reference document. Alongside the score it can render the match matrices and an aligned view of the shared substrings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rate two strings by their common substrings
    Compare(compare::CompareArgs),

    /// Rate two strings word by word, weighted by word rarity
    Rate(rate::RateArgs),

    /// Print word frequencies for a reference document
    Frequencies(frequencies::FrequenciesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
