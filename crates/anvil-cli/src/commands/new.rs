//! `anvil new`: collect a `ProjectConfig` and hand it to the scaffold service.
//!
//! Every question is skipped when its flag is given. Version catalogs are
//! resolved before the first question is asked.

use std::path::PathBuf;

use anvil_adapters::{GradleRenderer, LocalFilesystem};
use anvil_core::{
    application::{ScaffoldService, WritePolicy},
    domain::{
        ApiStyle, DbDriver, FsEntry, JavaPackage, ProjectConfig, ProjectStructure, VersionKind,
        VersionResolution, naming,
    },
    error::AnvilError,
};
use tracing::{info, instrument, warn};

use crate::{
    cli::NewArgs,
    commands::version_resolver,
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
    prompts::{AcceptDefaults, Prompter},
};

#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = prompter_for(&args)?;

    let offered = offer_versions(&args, &config, &output)?;
    let project = collect(&args, &config.defaults, &offered, prompter.as_ref())?;
    info!(%project, "Configuration collected");

    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let service = ScaffoldService::new(
        Box::new(GradleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let structure = service.plan(&project, &output_dir)?;
        return show_plan(&structure, &output);
    }

    let policy = if args.force {
        WritePolicy::Overwrite
    } else {
        WritePolicy::FailIfExists
    };
    let report = service.generate(&project, &output_dir, policy)?;

    output.success(&format!(
        "Created {} ({} files, {} directories)",
        report.root.display(),
        report.files,
        report.directories
    ))?;
    if report.overwritten {
        output.warning("Existing files with generated names were overwritten")?;
    }
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    output.print("  gradle wrapper")?;
    output.json(&report)?;

    Ok(())
}

// ── Prompter selection ────────────────────────────────────────────────────────

fn prompter_for(args: &NewArgs) -> CliResult<Box<dyn Prompter>> {
    if args.yes {
        return Ok(Box::new(AcceptDefaults));
    }
    terminal_prompter()
}

#[cfg(feature = "interactive")]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Err(CliError::NotInteractive {
            question: "Project name".into(),
        });
    }
    Ok(Box::new(crate::prompts::TerminalPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Versions ──────────────────────────────────────────────────────────────────

/// Catalogs for the versions not fixed by a flag.
#[derive(Debug, Default)]
pub(crate) struct OfferedVersions {
    pub java: Option<VersionResolution>,
    pub spring_boot: Option<VersionResolution>,
}

fn offer_versions(
    args: &NewArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<OfferedVersions> {
    let need_java = args.java_version.is_none();
    let need_boot = args.boot_version.is_none();
    if !need_java && !need_boot {
        return Ok(OfferedVersions::default());
    }

    let offline = args.offline || config.metadata.offline;
    let resolver = version_resolver(offline, &config.metadata);

    let spinner = output.spinner("Fetching available versions...");
    let java = need_java.then(|| resolver.resolve(VersionKind::Java));
    let spring_boot = need_boot.then(|| resolver.resolve(VersionKind::SpringBoot));
    spinner.finish_and_clear();

    let fell_back = [&java, &spring_boot]
        .into_iter()
        .flatten()
        .any(VersionResolution::is_fallback);
    if fell_back && !offline {
        output.warning("Could not reach the version service, offering built-in versions")?;
    }

    Ok(OfferedVersions { java, spring_boot })
}

fn choose_version(
    kind: VersionKind,
    flag: Option<&String>,
    configured: Option<&String>,
    offered: Option<&VersionResolution>,
    prompter: &dyn Prompter,
) -> CliResult<String> {
    if let Some(version) = flag {
        return Ok(version.clone());
    }

    let catalog = offered
        .map(|r| r.catalog().clone())
        .unwrap_or_else(|| kind.fallback());
    let mut items = catalog.candidates().to_vec();
    let default = match configured {
        Some(version) => match items.iter().position(|c| c == version) {
            Some(i) => i,
            None => {
                items.insert(0, version.clone());
                0
            }
        },
        None => catalog.default_index(),
    };

    let index = prompter.select(&format!("{} version", kind.label()), &items, default)?;
    items
        .get(index)
        .cloned()
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("no {} version at position {index}", kind.label()),
        })
}

// ── Question flow ─────────────────────────────────────────────────────────────

fn project_name_rule(answer: &str) -> Result<(), String> {
    naming::validate_project_name(answer.trim()).map_err(|e| e.to_string())
}

fn group_id_rule(answer: &str) -> Result<(), String> {
    JavaPackage::parse(answer.trim())
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Ask (or default) every question in order and build the config.
pub(crate) fn collect(
    args: &NewArgs,
    defaults: &Defaults,
    offered: &OfferedVersions,
    prompter: &dyn Prompter,
) -> CliResult<ProjectConfig> {
    let project_name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.input("Project name", &defaults.project_name, project_name_rule)?,
    };
    let group_id = match &args.group_id {
        Some(group) => group.clone(),
        None => prompter.input("Group id", &defaults.group_id, group_id_rule)?,
    };

    let java_version = choose_version(
        VersionKind::Java,
        args.java_version.as_ref(),
        defaults.java_version.as_ref(),
        offered.java.as_ref(),
        prompter,
    )?;
    let springboot_version = choose_version(
        VersionKind::SpringBoot,
        args.boot_version.as_ref(),
        defaults.boot_version.as_ref(),
        offered.spring_boot.as_ref(),
        prompter,
    )?;

    let jpa = match args.jpa {
        Some(jpa) => jpa,
        None => prompter.confirm("Include Spring Data JPA?", defaults.jpa)?,
    };

    let db_drivers: Vec<DbDriver> = if !jpa {
        if !args.db.is_empty() {
            warn!("Database drivers ignored because JPA is disabled");
        }
        Vec::new()
    } else if !args.db.is_empty() {
        args.db.iter().copied().map(DbDriver::from).collect()
    } else {
        pick_many("Database drivers", &DbDriver::ALL, &defaults.db_drivers, |d| d.label(), prompter)?
    };

    let lombok = match args.lombok {
        Some(lombok) => lombok,
        None => prompter.confirm("Include Lombok?", defaults.lombok)?,
    };
    let mapstruct = match args.mapstruct {
        Some(mapstruct) => mapstruct,
        None => prompter.confirm("Include MapStruct?", defaults.mapstruct)?,
    };

    let api_styles: Vec<ApiStyle> = if args.no_api {
        Vec::new()
    } else if !args.api.is_empty() {
        args.api.iter().copied().map(ApiStyle::from).collect()
    } else {
        pick_many("API styles", &ApiStyle::ALL, &defaults.api_styles, |s| s.label(), prompter)?
    };

    ProjectConfig::builder()
        .project_name(project_name)
        .group_id(group_id)
        .java_version(java_version)
        .springboot_version(springboot_version)
        .jpa(jpa)
        .db_drivers(db_drivers)
        .lombok(lombok)
        .mapstruct(mapstruct)
        .api_styles(api_styles)
        .build()
        .map_err(|e| CliError::Core(AnvilError::from(e)))
}

fn pick_many<T: Copy + PartialEq>(
    question: &str,
    all: &[T],
    preselected: &[T],
    label: impl Fn(&T) -> &'static str,
    prompter: &dyn Prompter,
) -> CliResult<Vec<T>> {
    let items: Vec<String> = all.iter().map(|v| label(v).to_string()).collect();
    let defaults: Vec<bool> = all.iter().map(|v| preselected.contains(v)).collect();
    let chosen = prompter.multi_select(question, &items, &defaults)?;
    Ok(chosen.into_iter().filter_map(|i| all.get(i).copied()).collect())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn show_plan(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    output.info(&format!("Dry run: would create {}", structure.root().display()))?;
    for entry in structure.entries() {
        let line = match entry {
            FsEntry::Directory(dir) => format!("  {}/", dir.path.display()),
            FsEntry::File(file) => format!("  {}", file.path.display()),
        };
        output.print(&line)?;
    }

    let paths: Vec<String> = structure
        .entries()
        .iter()
        .map(|e| e.path().display().to_string())
        .collect();
    output.json(&serde_json::json!({
        "dry_run": true,
        "root": structure.root(),
        "entries": paths,
    }))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ApiStyleArg, DriverArg};
    use crate::prompts::MockPrompter;

    fn flags() -> NewArgs {
        NewArgs {
            name: Some("clinic".into()),
            group_id: Some("com.example".into()),
            java_version: Some("21".into()),
            boot_version: Some("3.2.0".into()),
            jpa: Some(true),
            db: vec![DriverArg::PostgreSql],
            lombok: Some(true),
            mapstruct: Some(true),
            api: vec![ApiStyleArg::Rest],
            ..NewArgs::default()
        }
    }

    fn quiet_output() -> OutputManager {
        let args = crate::cli::GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: Some(crate::cli::OutputFormat::Plain),
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn versions_given_as_flags_skip_resolution() {
        let offered = offer_versions(&flags(), &AppConfig::default(), &quiet_output()).unwrap();
        assert!(offered.java.is_none());
        assert!(offered.spring_boot.is_none());
    }

    #[test]
    fn offline_resolves_only_missing_versions() {
        let args = NewArgs {
            boot_version: None,
            offline: true,
            ..flags()
        };
        let offered = offer_versions(&args, &AppConfig::default(), &quiet_output()).unwrap();
        assert!(offered.java.is_none());
        let boot = offered.spring_boot.unwrap();
        assert!(boot.is_fallback());
        assert_eq!(boot.catalog().default_version(), "3.2.0");
    }

    fn offline() -> OfferedVersions {
        OfferedVersions {
            java: Some(VersionResolution::Fallback {
                catalog: VersionKind::Java.fallback(),
                reason: "offline".into(),
            }),
            spring_boot: Some(VersionResolution::Fallback {
                catalog: VersionKind::SpringBoot.fallback(),
                reason: "offline".into(),
            }),
        }
    }

    #[test]
    fn flags_answer_every_question() {
        let mut prompter = MockPrompter::new();
        prompter.expect_input().never();
        prompter.expect_confirm().never();
        prompter.expect_select().never();
        prompter.expect_multi_select().never();

        let cfg = collect(&flags(), &Defaults::default(), &OfferedVersions::default(), &prompter)
            .unwrap();
        assert_eq!(cfg.root_dir_name(), "clinic-api");
        assert_eq!(cfg.effective_db_drivers().collect::<Vec<_>>(), [DbDriver::PostgreSql]);
        assert!(cfg.has_api_style(ApiStyle::Rest));
    }

    #[test]
    fn yes_uses_configured_defaults_and_catalog_defaults() {
        let cfg = collect(&NewArgs::default(), &Defaults::default(), &offline(), &AcceptDefaults)
            .unwrap();
        assert_eq!(cfg.project_name(), "my-project");
        assert_eq!(cfg.group_id().to_string(), "com.example");
        assert_eq!(cfg.java_version(), "25");
        assert_eq!(cfg.springboot_version(), "3.2.0");
        assert!(cfg.jpa() && cfg.lombok() && cfg.mapstruct());
        assert!(cfg.db_drivers().is_empty());
        assert_eq!(cfg.api_styles().iter().copied().collect::<Vec<_>>(), [ApiStyle::Rest]);
    }

    #[test]
    fn configured_version_outside_catalog_is_offered_first() {
        let defaults = Defaults {
            java_version: Some("23".into()),
            ..Defaults::default()
        };
        let cfg = collect(&NewArgs::default(), &defaults, &offline(), &AcceptDefaults).unwrap();
        assert_eq!(cfg.java_version(), "23");
    }

    #[test]
    fn driver_question_is_skipped_without_jpa() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .withf(|question, default| question == "Include Spring Data JPA?" && *default)
            .returning(|_, _| Ok(false));
        prompter
            .expect_confirm()
            .withf(|question, _| question != "Include Spring Data JPA?")
            .returning(|_, default| Ok(default));
        prompter
            .expect_multi_select()
            .withf(|question, _, _| question == "API styles")
            .times(1)
            .returning(|_, _, _| Ok(vec![1]));

        let args = NewArgs {
            jpa: None,
            db: Vec::new(),
            api: Vec::new(),
            ..flags()
        };
        let cfg = collect(&args, &Defaults::default(), &OfferedVersions::default(), &prompter)
            .unwrap();
        assert!(!cfg.jpa());
        assert!(cfg.db_drivers().is_empty());
        assert_eq!(cfg.api_styles().iter().copied().collect::<Vec<_>>(), [ApiStyle::GraphQl]);
    }

    #[test]
    fn driver_flags_are_dropped_when_jpa_is_off() {
        let args = NewArgs {
            jpa: Some(false),
            db: vec![DriverArg::MySql],
            ..flags()
        };
        let cfg = collect(&args, &Defaults::default(), &OfferedVersions::default(), &AcceptDefaults)
            .unwrap();
        assert!(cfg.db_drivers().is_empty());
    }

    #[test]
    fn no_api_selects_no_style() {
        let args = NewArgs {
            api: Vec::new(),
            no_api: true,
            ..flags()
        };
        let cfg = collect(&args, &Defaults::default(), &OfferedVersions::default(), &AcceptDefaults)
            .unwrap();
        assert!(cfg.api_styles().is_empty());
    }

    #[test]
    fn chosen_versions_come_from_the_catalog() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|question, items, default| {
                question == "Java version" && items[0] == "25" && *default == 0
            })
            .returning(|_, _, _| Ok(2));
        prompter
            .expect_select()
            .withf(|question, _, _| question == "Spring Boot version")
            .returning(|_, _, default| Ok(default));

        let args = NewArgs {
            java_version: None,
            boot_version: None,
            ..flags()
        };
        let cfg = collect(&args, &Defaults::default(), &offline(), &prompter).unwrap();
        assert_eq!(cfg.java_version(), "17");
        assert_eq!(cfg.springboot_version(), "3.2.0");
    }

    #[test]
    fn invalid_name_flag_is_rejected_before_generation() {
        let args = NewArgs {
            name: Some("1clinic".into()),
            ..flags()
        };
        let err = collect(&args, &Defaults::default(), &OfferedVersions::default(), &AcceptDefaults)
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_default_group_id_is_reported() {
        let defaults = Defaults {
            group_id: "com..example".into(),
            ..Defaults::default()
        };
        let args = NewArgs {
            group_id: None,
            ..flags()
        };
        let err = collect(&args, &defaults, &OfferedVersions::default(), &AcceptDefaults)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
