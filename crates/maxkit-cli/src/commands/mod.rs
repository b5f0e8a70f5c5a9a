//! Command handlers.

pub mod completions;
pub mod config;
pub mod list;
pub mod new;

use std::path::PathBuf;

use crate::{cli::GlobalArgs, config::AppConfig, error::{CliError, CliResult}};

/// Resolve the SDK installation root.
///
/// Priority: `--sdk-path` / `MAXIM_PATH` (clap folds the env var into the
/// flag), then the config file. The resolved path is handed to the catalog
/// explicitly — nothing downstream reads the environment.
pub fn resolve_sdk_root(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    global
        .sdk_path
        .clone()
        .or_else(|| config.sdk.path.clone())
        .ok_or(CliError::SdkPathNotConfigured)
}
