use std::io::Write;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::matrix::{
    calculate_comparison_matrix, calculate_substring_matrix, ComparisonMatrix, SubstringMatrix,
};
use crate::core::substring::{calculate_substring_tuples, SubstringMatch};
use crate::rating::substrings::{rate_strings_1, DEFAULT_WEIGHT};
use crate::render;

#[derive(Args)]
pub struct CompareArgs {
    /// First string to compare
    #[arg(required = true)]
    pub string_a: String,

    /// Second string to compare
    #[arg(required = true)]
    pub string_b: String,

    /// Drop substring matches of this length or shorter
    #[arg(long, default_value_t = 0)]
    pub min_length: usize,

    /// Rating exponent; higher favors few long matches over many short ones
    #[arg(long, default_value_t = DEFAULT_WEIGHT)]
    pub weight: f64,

    /// Render the byte-equality comparison matrix
    #[arg(long)]
    pub show_comparison: bool,

    /// Render the run-length matrix
    #[arg(long)]
    pub show_matrix: bool,

    /// Render the substring alignment
    #[arg(long)]
    pub show_alignment: bool,
}

pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let cm = calculate_comparison_matrix(&args.string_a, &args.string_b);
    let sm = calculate_substring_matrix(&args.string_a, &args.string_b, &cm);
    let matches =
        calculate_substring_tuples(&args.string_a, &args.string_b, &sm, args.min_length);
    let rating = rate_strings_1(&args.string_a, &args.string_b, &matches, args.weight);

    if verbose {
        eprintln!(
            "{} x {} bytes, {} matches above length {}",
            args.string_a.len(),
            args.string_b.len(),
            matches.len(),
            args.min_length
        );
    }

    match format {
        OutputFormat::Text => print_text(&args, &cm, &sm, &matches, rating)?,
        OutputFormat::Json => print_json(&args, sm.longest_run(), &matches, rating)?,
        OutputFormat::Tsv => print_tsv(&args, sm.longest_run(), &matches, rating),
    }

    Ok(())
}

fn print_text(
    args: &CompareArgs,
    cm: &ComparisonMatrix,
    sm: &SubstringMatrix,
    matches: &[SubstringMatch],
    rating: f64,
) -> anyhow::Result<()> {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nString A: {}", args.string_a);
    println!("String B: {}", args.string_b);
    println!("\nMatches: {}", matches.len());
    println!("Longest common substring: {} bytes", sm.longest_run());
    println!("Rating: {rating:.4} (weight {})", args.weight);

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    if args.show_comparison {
        writeln!(sink, "\nComparison matrix:")?;
        render::print_comparison_matrix(&args.string_a, &args.string_b, cm, &mut sink)?;
    }

    if args.show_matrix {
        writeln!(sink, "\nSubstring matrix:")?;
        render::print_substring_matrix(&args.string_a, &args.string_b, sm, &mut sink)?;
    }

    if args.show_alignment {
        writeln!(sink, "\nAlignment:")?;
        render::print_substring_tuples(&args.string_a, &args.string_b, matches, &mut sink)?;
    }

    Ok(())
}

fn print_json(
    args: &CompareArgs,
    longest_run: usize,
    matches: &[SubstringMatch],
    rating: f64,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "string_a": args.string_a,
        "string_b": args.string_b,
        "min_length": args.min_length,
        "weight": args.weight,
        "longest_run": longest_run,
        "matches": matches,
        "rating": rating,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(args: &CompareArgs, longest_run: usize, matches: &[SubstringMatch], rating: f64) {
    println!("string_a\tstring_b\tmatches\tlongest_run\trating");
    println!(
        "{}\t{}\t{}\t{}\t{:.4}",
        args.string_a,
        args.string_b,
        matches.len(),
        longest_run,
        rating,
    );
}
