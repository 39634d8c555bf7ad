//! CLI error types.

use navgen_config::ConfigError;
use navgen_core::PatchError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Patch(#[from] PatchError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
