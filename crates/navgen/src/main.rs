//! navgen CLI - Navigation synthesizer.
//!
//! Provides commands for:
//! - `generate`: Print the navigation tree
//! - `patch`: Splice the navigation tree into the site configuration
//! - `categories`: List the categories that would be resolved
//! - `info`: Show the resolved configuration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CategoriesArgs, GenerateArgs, InfoArgs, PatchArgs};
use output::Output;

/// navgen - Navigation synthesizer for documentation sites.
#[derive(Parser)]
#[command(name = "navgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the navigation tree and print it.
    Generate(GenerateArgs),
    /// Assemble the navigation tree and write it into the site configuration.
    Patch(PatchArgs),
    /// List the categories that would be resolved.
    Categories(CategoriesArgs),
    /// Show the resolved configuration.
    Info(InfoArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Generate(args) => args.verbose,
        Commands::Patch(args) => args.verbose,
        Commands::Categories(_) | Commands::Info(_) => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Patch(args) => args.execute(),
        Commands::Categories(args) => args.execute(),
        Commands::Info(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
