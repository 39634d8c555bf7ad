//! `navgen generate` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use navgen_config::{CliSettings, Config};
use navgen_core::{NavTree, render_array};

use super::{build_tree, resolve_categories};
use crate::error::CliError;
use crate::output::Output;

/// Output format for the navigation tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// JavaScript array literal, as written into the site configuration.
    Js,
}

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Enable verbose output (log each resolved category).
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the tree cannot be serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let categories = resolve_categories(&config);
        let tree = build_tree(&config, &categories);
        output.print(&render(&tree, self.format)?);

        Ok(())
    }
}

/// Render a tree in the requested format.
pub(crate) fn render(tree: &NavTree, format: Format) -> Result<String, CliError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(tree)?),
        Format::Js => Ok(render_array(tree, "")),
    }
}
