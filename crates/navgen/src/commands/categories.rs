//! `navgen categories` command implementation.

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};

use super::resolve_categories;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the categories command.
#[derive(Args)]
pub(crate) struct CategoriesArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CategoriesArgs {
    /// Execute the categories command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let categories = resolve_categories(&config);
        if categories.is_empty() {
            output.warning("No categories configured (add [[nav.categories]] to navgen.toml)");
            return Ok(());
        }

        for category in &categories {
            output.print(&format!("{}\t{}", category.id, category.display_name));
        }
        if config.nav.discover {
            output.info(&format!(
                "Discovered under {}",
                config.docs_resolved.source_dir.display()
            ));
        }

        Ok(())
    }
}
