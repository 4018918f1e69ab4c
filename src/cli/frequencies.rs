use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::words::{calculate_word_frequencies, read_document, WordPattern};

#[derive(Args)]
pub struct FrequenciesArgs {
    /// Document to count word occurrences in
    #[arg(required = true)]
    pub document: PathBuf,

    /// Only show the N most frequent words
    #[arg(long)]
    pub top: Option<usize>,

    /// Custom word pattern (regular expression)
    #[arg(long)]
    pub pattern: Option<String>,
}

pub fn run(args: FrequenciesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pattern = match &args.pattern {
        Some(p) => WordPattern::new(p).with_context(|| format!("invalid word pattern '{p}'"))?,
        None => WordPattern::default(),
    };

    let lines = read_document(&args.document)
        .with_context(|| format!("failed to read document '{}'", args.document.display()))?;
    let frequencies = calculate_word_frequencies(&lines, &pattern);

    if verbose {
        eprintln!(
            "{}: {} lines, {} distinct words",
            args.document.display(),
            lines.len(),
            frequencies.len()
        );
    }

    // Most frequent first; ties in word order for stable output.
    let mut entries: Vec<(&str, usize)> = frequencies.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    if let Some(top) = args.top {
        entries.truncate(top);
    }

    match format {
        OutputFormat::Text => {
            println!("Word Frequencies: {}", args.document.display());
            println!("{}", "=".repeat(60));
            for (word, count) in &entries {
                println!("{count:>8}  {word}");
            }
        }
        OutputFormat::Json => {
            let words: Vec<_> = entries
                .iter()
                .map(|(word, count)| serde_json::json!({ "word": word, "count": count }))
                .collect();
            let output = serde_json::json!({
                "document": args.document.display().to_string(),
                "distinct_words": frequencies.len(),
                "words": words,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("word\tcount");
            for (word, count) in &entries {
                println!("{word}\t{count}");
            }
        }
    }

    Ok(())
}
