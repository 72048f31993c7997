//! Implementation of the `layergen generate` command.
//!
//! Responsibility: translate CLI arguments into an `EntitySpec` and
//! `GenerateOptions`, call the core generate service, and display the
//! per-step report. No business logic lives here.

use tracing::{debug, info, instrument};

use layergen_adapters::{AskamaRenderer, GofmtFormatter, LocalFilesystem};
use layergen_core::{
    application::{GenerateOptions, GenerateReport, GenerateService, StepOutcome},
    domain::{ModuleSet, Storage},
};

use crate::{
    cli::{GenerateArgs, StorageArg, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    fieldfile::{self, FieldFile},
    output::OutputManager,
};

/// Execute the `layergen generate` command.
///
/// Dispatch sequence:
/// 1. Load the field file, if any
/// 2. Merge flags and file into an `EntitySpec`
/// 3. Resolve storage and module selection (flag, else config default)
/// 4. Run the generate service with production adapters
/// 5. Print the per-step report
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Field file
    let file = args
        .file
        .as_deref()
        .map(FieldFile::load)
        .transpose()?;

    // 2. Entity spec
    let spec = fieldfile::build_entity_spec(args.name.as_deref(), &args.comment, file.as_ref())?;

    // 3. Options
    let storage = resolve_storage(args.storage, &config)?;
    let modules = resolve_modules(args.modules.as_deref(), &config)?;

    debug!(
        entity = %spec.name,
        %storage,
        %modules,
        overwrite = args.overwrite,
        "Options resolved"
    );

    let options = GenerateOptions {
        dir: args.dir,
        pkg_name: args.pkg,
        storage,
        modules,
        overwrite: args.overwrite,
    };

    // 4. Run the service
    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(AskamaRenderer::new()),
        Box::new(GofmtFormatter::new()),
    );

    output.header(&format!("Generating '{}'...", spec.name))?;
    info!(entity = %spec.name, "Generation started");

    let report = service.generate(&spec, &options).map_err(CliError::Core)?;

    // 5. Report
    print_report(&report, &output)?;

    if report.has_failures() {
        // Per-step failures are part of normal partial progress; they are
        // reported above but do not change the exit status.
        output.warning(&format!(
            "{} of {} steps failed; see messages above",
            report.failures().count(),
            report.steps.len()
        ))?;
    } else if !global.quiet {
        output.success(&format!("Entity '{}' generated!", spec.name))?;
    }

    Ok(())
}

fn print_report(report: &GenerateReport, output: &OutputManager) -> CliResult<()> {
    for step in &report.steps {
        let path = step.path.display();
        match &step.outcome {
            // Inserts report the same wording as fresh writes; the user
            // cares that the file now holds the registration, not how it
            // got there.
            StepOutcome::Written | StepOutcome::Inserted => {
                output.success(&format!("file [{path}] written successfully"))?;
            }
            StepOutcome::SkippedExisting => {
                output.print(&format!("file [{path}] already registered, skipped"))?;
            }
            StepOutcome::Failed(reason) => {
                output.error(&format!("{}: {reason}", step.description))?;
            }
        }
        if let Some(warning) = &step.format_warning {
            output.warning(&format!("file [{path}] not formatted: {warning}"))?;
        }
    }
    Ok(())
}

fn resolve_storage(flag: Option<StorageArg>, config: &AppConfig) -> CliResult<Storage> {
    match flag {
        Some(StorageArg::Gorm) => Ok(Storage::Gorm),
        Some(StorageArg::Mongo) => Ok(Storage::Mongo),
        None => config
            .defaults
            .storage
            .parse()
            .map_err(|e: layergen_core::domain::DomainError| CliError::Core(e.into())),
    }
}

fn resolve_modules(flag: Option<&str>, config: &AppConfig) -> CliResult<ModuleSet> {
    flag.unwrap_or(&config.defaults.modules)
        .parse()
        .map_err(|e: layergen_core::domain::DomainError| CliError::Core(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layergen_core::domain::Module;

    #[test]
    fn storage_falls_back_to_config_default() {
        let config = AppConfig::default();
        assert_eq!(resolve_storage(None, &config).unwrap(), Storage::Gorm);
        assert_eq!(
            resolve_storage(Some(StorageArg::Mongo), &config).unwrap(),
            Storage::Mongo
        );
    }

    #[test]
    fn modules_fall_back_to_config_default() {
        let config = AppConfig::default();
        let set = resolve_modules(None, &config).unwrap();
        assert!(set.contains(Module::Router));

        let set = resolve_modules(Some("schema,bll"), &config).unwrap();
        assert!(set.contains(Module::Schema));
        assert!(!set.contains(Module::Api));
    }

    #[test]
    fn unknown_module_is_a_user_error() {
        let config = AppConfig::default();
        let err = resolve_modules(Some("schema,frontend"), &config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
