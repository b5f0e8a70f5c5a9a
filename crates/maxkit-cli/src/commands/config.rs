//! `maxkit config` — inspect and create the configuration file.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init { force } => init(force, output),
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
            Ok(())
        }
        ConfigCommands::Show => show(&config),
    }
}

/// Write a default configuration file.
fn init(force: bool, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let default_config = AppConfig::default();
    let toml = toml::to_string_pretty(&default_config).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// Print the effective configuration as TOML.
fn show(config: &AppConfig) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    print!("{toml}");
    Ok(())
}
