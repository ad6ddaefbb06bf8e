//! `anvil versions`: show what `new` would offer.

use anvil_core::domain::{VersionKind, VersionResolution};
use serde::Serialize;

use crate::{
    cli::VersionsArgs, commands::version_resolver, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct VersionsView<'a> {
    kind: &'static str,
    source: &'static str,
    default: &'a str,
    candidates: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<&'a str>,
}

impl<'a> VersionsView<'a> {
    fn new(kind: VersionKind, resolution: &'a VersionResolution) -> Self {
        let catalog = resolution.catalog();
        Self {
            kind: kind.label(),
            source: resolution.source_label(),
            default: catalog.default_version(),
            candidates: catalog.candidates(),
            fallback_reason: match resolution {
                VersionResolution::Fallback { reason, .. } => Some(reason.as_str()),
                VersionResolution::Remote(_) => None,
            },
        }
    }
}

pub fn execute(args: VersionsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let offline = args.offline || config.metadata.offline;
    let resolver = version_resolver(offline, &config.metadata);

    let spinner = output.spinner("Fetching available versions...");
    let resolved = resolver.resolve_all();
    spinner.finish_and_clear();

    let views: Vec<VersionsView<'_>> = VersionKind::ALL
        .iter()
        .map(|&kind| VersionsView::new(kind, resolved.get(kind)))
        .collect();

    for view in &views {
        output.header(&format!("{} ({})", view.kind, view.source))?;
        for candidate in view.candidates {
            let marker = if candidate == view.default { " (default)" } else { "" };
            output.print(&format!("  {candidate}{marker}"))?;
        }
        if let Some(reason) = view.fallback_reason {
            output.print(&format!("  built-in list used: {reason}"))?;
        }
    }
    output.json(&views)?;

    Ok(())
}
