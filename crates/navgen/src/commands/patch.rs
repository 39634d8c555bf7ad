//! `navgen patch` command implementation.

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};
use navgen_core::{ConfigPatcher, PatchOutcome};

use super::generate::{Format, render};
use super::{build_tree, resolve_categories};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the patch command.
#[derive(Args)]
pub(crate) struct PatchArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site configuration file to patch (overrides config).
    #[arg(short, long)]
    target: Option<PathBuf>,

    /// Print the patched configuration instead of writing it.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output (log each resolved category).
    #[arg(short, long)]
    pub verbose: bool,
}

impl PatchArgs {
    /// Execute the patch command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, or if the target cannot be
    /// read, holds no navigation block, or cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            patch_target: self.target,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let categories = resolve_categories(&config);
        let tree = build_tree(&config, &categories);
        let target = &config.patch_resolved.target;
        let patcher = ConfigPatcher::new().with_key(config.patch_resolved.key.as_str());
        tracing::info!(
            path = %target.display(),
            key = patcher.key(),
            categories = categories.len(),
            "Patching site configuration"
        );

        if self.dry_run {
            let patched = patcher.patch_file_contents(&tree, target)?;
            output.print(&patched);
            output.info(&format!("Dry run: {} not modified", target.display()));
            return Ok(());
        }

        output.print(&render(&tree, Format::Json)?);
        match patcher.patch_file(&tree, target)? {
            PatchOutcome::Updated => {
                output.success(&format!("Updated {}", target.display()));
            }
            PatchOutcome::Unchanged => {
                output.info(&format!("{} is up to date", target.display()));
            }
        }

        Ok(())
    }
}
