//! Template validation against an SDK catalog.

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::SdkCatalog},
    domain::{ProjectSpec, TemplateSource, sdk},
    error::MaxkitResult,
};

/// Check a (target, template, BSP) triple against the catalog and resolve the
/// template's source directory.
///
/// Membership is checked strictly in target → template → BSP order, because
/// template and BSP sets are target-scoped: a wrong target must surface as
/// `UnknownTarget`, never as a downstream unknown-template message. The first
/// miss fails with the matching error kind carrying the invalid value and the
/// sorted list of valid alternatives.
pub fn validate(spec: &ProjectSpec, catalog: &dyn SdkCatalog) -> MaxkitResult<TemplateSource> {
    let targets = catalog.targets()?;
    if !targets.contains(spec.target()) {
        return Err(ApplicationError::UnknownTarget {
            target: spec.target().to_string(),
            available: targets.iter().map(|t| t.to_string()).collect(),
        }
        .into());
    }

    let templates = catalog.templates(spec.target())?;
    if !templates.contains(spec.template()) {
        return Err(ApplicationError::UnknownTemplate {
            target: spec.target().to_string(),
            template: spec.template().to_string(),
            available: templates.into_iter().collect(),
        }
        .into());
    }

    let bsps = catalog.bsps(spec.target())?;
    if !bsps.contains(spec.bsp()) {
        return Err(ApplicationError::UnknownBsp {
            target: spec.target().to_string(),
            bsp: spec.bsp().to_string(),
            available: bsps.into_iter().collect(),
        }
        .into());
    }

    let path = sdk::example_dir(catalog.root(), spec.target(), spec.template());
    debug!(template = %path.display(), "Template resolved");

    Ok(TemplateSource::new(
        spec.target().clone(),
        spec.template(),
        path,
    ))
}
