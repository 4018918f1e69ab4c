use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::words::{
    calculate_word_frequencies, read_document, words_in_string, WordFrequencies, WordPattern,
};
use crate::rating::words::rate_strings_2;

#[derive(Args)]
pub struct RateArgs {
    /// First string to rate
    #[arg(required = true)]
    pub string_a: String,

    /// Second string to rate
    #[arg(required = true)]
    pub string_b: String,

    /// Reference document for word-frequency statistics
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Custom word pattern (regular expression)
    #[arg(long)]
    pub pattern: Option<String>,
}

pub fn run(args: RateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pattern = match &args.pattern {
        Some(p) => WordPattern::new(p).with_context(|| format!("invalid word pattern '{p}'"))?,
        None => WordPattern::default(),
    };

    // Without a document every word falls back to frequency 1, so all words
    // rate as maximally rare.
    let frequencies = match &args.document {
        Some(path) => {
            let lines = read_document(path)
                .with_context(|| format!("failed to read document '{}'", path.display()))?;
            calculate_word_frequencies(&lines, &pattern)
        }
        None => WordFrequencies::default(),
    };

    if verbose {
        eprintln!(
            "String A: {} words, String B: {} words, document: {} distinct words",
            words_in_string(&args.string_a, &pattern).len(),
            words_in_string(&args.string_b, &pattern).len(),
            frequencies.len()
        );
    }

    let rating = rate_strings_2(&args.string_a, &args.string_b, &frequencies, &pattern);

    match format {
        OutputFormat::Text => print_text(&args, &frequencies, rating),
        OutputFormat::Json => print_json(&args, &pattern, &frequencies, rating)?,
        OutputFormat::Tsv => print_tsv(&args, rating),
    }

    Ok(())
}

fn print_text(args: &RateArgs, frequencies: &WordFrequencies, rating: f64) {
    println!("Word Rating Results");
    println!("{}", "=".repeat(60));

    println!("\nString A: {}", args.string_a);
    println!("String B: {}", args.string_b);
    match &args.document {
        Some(path) => println!(
            "Document: {} ({} distinct words)",
            path.display(),
            frequencies.len()
        ),
        None => println!("Document: none (all words treated as rare)"),
    }
    println!("\nRating: {rating:.4}");
}

fn print_json(
    args: &RateArgs,
    pattern: &WordPattern,
    frequencies: &WordFrequencies,
    rating: f64,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "string_a": args.string_a,
        "string_b": args.string_b,
        "document": args.document.as_ref().map(|p| p.display().to_string()),
        "pattern": pattern.as_str(),
        "distinct_words": frequencies.len(),
        "rating": rating,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(args: &RateArgs, rating: f64) {
    println!("string_a\tstring_b\trating");
    println!("{}\t{}\t{:.4}", args.string_a, args.string_b, rating);
}
