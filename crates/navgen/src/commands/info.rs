//! `navgen info` command implementation.

use std::path::PathBuf;

use clap::Args;
use navgen_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the info command.
#[derive(Args)]
pub(crate) struct InfoArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InfoArgs {
    /// Execute the info command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        for line in describe(&config) {
            output.print(&line);
        }
        if config.config_path.is_none() {
            output.highlight("No navgen.toml found; showing defaults");
        }

        Ok(())
    }
}

fn describe(config: &Config) -> Vec<String> {
    let unset = || "(unset)".to_owned();
    let site = &config.site;

    let mut lines = vec![
        format!(
            "Config file:       {}",
            config
                .config_path
                .as_ref()
                .map_or_else(unset, |p| p.display().to_string())
        ),
        format!(
            "Source directory:  {}",
            config.docs_resolved.source_dir.display()
        ),
        format!("Index document:    {}", config.docs_resolved.index_name),
        format!(
            "Patch target:      {} (key `{}`)",
            config.patch_resolved.target.display(),
            config.patch_resolved.key
        ),
        format!(
            "Home link:         {} -> {}",
            config.nav.home_text, config.nav.home_link
        ),
        format!(
            "Categories:        {}{}",
            config.nav.categories.len(),
            if config.nav.discover { " (discovery)" } else { "" }
        ),
        format!("Site title:        {}", site.title.clone().unwrap_or_else(unset)),
        format!(
            "Sitemap host:      {}",
            site.sitemap_host.clone().unwrap_or_else(unset)
        ),
        format!(
            "Search provider:   {}",
            site.search
                .as_ref()
                .map_or_else(unset, |s| s.provider.clone())
        ),
    ];
    if !site.head.is_empty() {
        lines.push(format!("Head entries:      {}", site.head.len()));
    }
    lines
}
