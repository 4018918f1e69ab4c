use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod rating;
mod render;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("soft_compare=debug,info")
    } else {
        EnvFilter::new("soft_compare=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Rate(args) => {
            cli::rate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Frequencies(args) => {
            cli::frequencies::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
