//! Implementation of the `maxkit list` command.

use serde::Serialize;

use maxkit_adapters::SdkDirCatalog;
use maxkit_core::{
    application::{ApplicationError, ports::SdkCatalog},
    domain::TargetId,
};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    commands::resolve_sdk_root,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON payload for `list --format json`.
#[derive(Serialize)]
#[serde(untagged)]
enum Listing {
    Targets {
        targets: Vec<String>,
    },
    Target {
        target: String,
        templates: Vec<String>,
        bsps: Vec<String>,
    },
}

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let sdk_root = resolve_sdk_root(&global, &config)?;
    let catalog = SdkDirCatalog::open(&sdk_root).map_err(CliError::Core)?;

    let listing = match &args.target {
        Some(raw) => {
            let target =
                TargetId::resolve(raw).map_err(maxkit_core::error::MaxkitError::from)?;
            let targets = catalog.targets().map_err(CliError::Core)?;
            if !targets.contains(&target) {
                return Err(CliError::Core(
                    ApplicationError::UnknownTarget {
                        target: target.to_string(),
                        available: targets.iter().map(|t| t.to_string()).collect(),
                    }
                    .into(),
                ));
            }
            Listing::Target {
                target: target.to_string(),
                templates: catalog
                    .templates(&target)
                    .map_err(CliError::Core)?
                    .into_iter()
                    .collect(),
                bsps: catalog
                    .bsps(&target)
                    .map_err(CliError::Core)?
                    .into_iter()
                    .collect(),
            }
        }
        None => Listing::Targets {
            targets: catalog
                .targets()
                .map_err(CliError::Core)?
                .iter()
                .map(|t| t.to_string())
                .collect(),
        },
    };

    match args.format {
        ListFormat::Table => print_table(&listing, &output)?,
        ListFormat::List => print_list(&listing),
        ListFormat::Json => {
            // Serialised straight to stdout (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }
    }

    Ok(())
}

fn print_table(listing: &Listing, output: &OutputManager) -> CliResult<()> {
    match listing {
        Listing::Targets { targets } => {
            output.header("Available targets:")?;
            for target in targets {
                output.print(&format!("  {target}"))?;
            }
        }
        Listing::Target {
            target,
            templates,
            bsps,
        } => {
            output.header(&format!("Templates for {target}:"))?;
            for template in templates {
                output.print(&format!("  {template}"))?;
            }
            output.print("")?;
            output.header(&format!("BSPs for {target}:"))?;
            for bsp in bsps {
                output.print(&format!("  {bsp}"))?;
            }
        }
    }
    Ok(())
}

fn print_list(listing: &Listing) {
    match listing {
        Listing::Targets { targets } => {
            for target in targets {
                println!("{target}");
            }
        }
        Listing::Target {
            templates, bsps, ..
        } => {
            for name in templates.iter().chain(bsps) {
                println!("{name}");
            }
        }
    }
}
