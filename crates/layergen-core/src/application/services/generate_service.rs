//! Generate Service - main application orchestrator.
//!
//! This service walks one entity through the fixed layer sequence:
//! 1. schema (request/response objects)
//! 2. model (interface + storage entity/impl + registrations)
//! 3. bll (interface + impl + registration)
//! 4. api (handler + registration)
//! 5. mock (swagger stub + registration)
//! 6. router (route group + struct field)
//!
//! A schema failure aborts the run, since every later layer references the
//! schema types. Every other step is best-effort: its failure is recorded
//! in the report and the walk continues, so one broken anchor does not cost
//! the user the files that could still be generated.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, SourceFormatter, TemplateRenderer},
        services::{injections, paths},
    },
    domain::{
        AnchorRule, EntitySpec, GormEntityContext, InsertOutcome, LayerContext, LayerTemplate,
        Module, ModuleSet, MongoEntityContext, SchemaContext, Storage, anchor,
    },
    error::LayergenResult,
};

/// Per-run configuration resolved by the caller.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root directory of the target project.
    pub dir: PathBuf,
    /// Go module path of the target project, e.g. `github.com/acme/app`.
    pub pkg_name: String,
    /// Storage backend for the model layer.
    pub storage: Storage,
    /// Which layers to generate.
    pub modules: ModuleSet,
    /// Replace existing generated files instead of failing.
    pub overwrite: bool,
}

/// What happened to one step's target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new file was written.
    Written,
    /// A registration was spliced into an existing file.
    Inserted,
    /// The registration was already present; nothing was written.
    SkippedExisting,
    /// The step failed; the walk continued.
    Failed(String),
}

/// One step of the generation walk, for user-facing reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub description: String,
    pub path: PathBuf,
    pub outcome: StepOutcome,
    /// Set when the file landed on disk but could not be formatted.
    pub format_warning: Option<String>,
}

/// Full account of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub steps: Vec<StepReport>,
}

impl GenerateReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Main generation service.
///
/// Orchestrates rendering, writing, anchored insertion, and formatting via
/// the driven ports.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    formatter: Box<dyn SourceFormatter>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        formatter: Box<dyn SourceFormatter>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            formatter,
        }
    }

    /// Generate all selected layers for one entity.
    ///
    /// Returns `Err` only when the schema step fails; all other failures are
    /// carried inside the report.
    #[instrument(skip_all, fields(entity = %spec.name, storage = %opts.storage))]
    pub fn generate(
        &self,
        spec: &EntitySpec,
        opts: &GenerateOptions,
    ) -> LayergenResult<GenerateReport> {
        info!(modules = %opts.modules, "Generating layers");
        let mut report = GenerateReport::default();
        let dir = opts.dir.as_path();
        let pkg = opts.pkg_name.as_str();
        let name = spec.name.as_str();

        if opts.modules.contains(Module::Schema) {
            // Every later layer imports the schema types, so there is no
            // point continuing without them.
            let step = self.write_step(
                "schema",
                paths::schema_file(dir, name),
                &LayerTemplate::Schema(SchemaContext::new(pkg, spec)),
                opts.overwrite,
            )?;
            report.steps.push(step);
        }

        if opts.modules.contains(Module::Model) {
            self.generate_model(spec, opts, &mut report);
        }

        if opts.modules.contains(Module::Bll) {
            self.record(
                &mut report,
                "bll interface",
                paths::bll_iface_file(dir, name),
                |path| {
                    self.write_step(
                        "bll interface",
                        path,
                        &LayerTemplate::BllIface(LayerContext::new(pkg, spec)),
                        opts.overwrite,
                    )
                },
            );
            self.record(
                &mut report,
                "bll implementation",
                paths::bll_impl_file(dir, name),
                |path| {
                    self.write_step(
                        "bll implementation",
                        path,
                        &LayerTemplate::BllImpl(LayerContext::new(pkg, spec)),
                        opts.overwrite,
                    )
                },
            );
            self.record(
                &mut report,
                "bll registration",
                paths::bll_inject_file(dir),
                |path| self.insert_step("bll registration", path, &injections::bll_registration(name)),
            );
        }

        if opts.modules.contains(Module::Api) {
            self.record(&mut report, "api handler", paths::api_file(dir, name), |path| {
                self.write_step(
                    "api handler",
                    path,
                    &LayerTemplate::Api(LayerContext::new(pkg, spec)),
                    opts.overwrite,
                )
            });
            self.record(
                &mut report,
                "api registration",
                paths::api_inject_file(dir),
                |path| self.insert_step("api registration", path, &injections::api_registration(name)),
            );
        }

        if opts.modules.contains(Module::Mock) {
            self.record(&mut report, "mock handler", paths::mock_file(dir, name), |path| {
                self.write_step(
                    "mock handler",
                    path,
                    &LayerTemplate::ApiMock(LayerContext::new(pkg, spec)),
                    opts.overwrite,
                )
            });
            self.record(
                &mut report,
                "mock registration",
                paths::mock_inject_file(dir),
                |path| {
                    self.insert_step("mock registration", path, &injections::mock_registration(name))
                },
            );
        }

        if opts.modules.contains(Module::Router) {
            self.record(
                &mut report,
                "router routes",
                paths::router_api_file(dir),
                |path| {
                    self.insert_step(
                        "router routes",
                        path,
                        &injections::router_api_registration(name),
                    )
                },
            );
            self.record(
                &mut report,
                "router field",
                paths::router_file(dir),
                |path| {
                    self.insert_step(
                        "router field",
                        path,
                        &injections::router_field_registration(name),
                    )
                },
            );
        }

        info!(
            steps = report.steps.len(),
            failed = report.failures().count(),
            "Generation finished"
        );
        Ok(report)
    }

    fn generate_model(&self, spec: &EntitySpec, opts: &GenerateOptions, report: &mut GenerateReport) {
        let dir = opts.dir.as_path();
        let pkg = opts.pkg_name.as_str();
        let name = spec.name.as_str();

        self.record(
            report,
            "model interface",
            paths::model_iface_file(dir, name),
            |path| {
                self.write_step(
                    "model interface",
                    path,
                    &LayerTemplate::ModelIface(LayerContext::new(pkg, spec)),
                    opts.overwrite,
                )
            },
        );

        match opts.storage {
            Storage::Gorm => {
                self.record(
                    report,
                    "gorm entity",
                    paths::gorm_entity_file(dir, name),
                    |path| {
                        self.write_step(
                            "gorm entity",
                            path,
                            &LayerTemplate::GormEntity(GormEntityContext::new(pkg, spec)),
                            opts.overwrite,
                        )
                    },
                );
                self.record(
                    report,
                    "gorm entity registration",
                    paths::gorm_inject_file(dir),
                    |path| {
                        self.insert_step(
                            "gorm entity registration",
                            path,
                            &injections::gorm_entity_registration(name),
                        )
                    },
                );
                self.record(report, "gorm model", paths::gorm_model_file(dir, name), |path| {
                    self.write_step(
                        "gorm model",
                        path,
                        &LayerTemplate::GormModel(LayerContext::new(pkg, spec)),
                        opts.overwrite,
                    )
                });
                self.record(
                    report,
                    "gorm model registration",
                    paths::gorm_model_inject_file(dir),
                    |path| {
                        self.insert_step(
                            "gorm model registration",
                            path,
                            &injections::model_registration(name),
                        )
                    },
                );
            }
            Storage::Mongo => {
                self.record(
                    report,
                    "mongo entity",
                    paths::mongo_entity_file(dir, name),
                    |path| {
                        self.write_step(
                            "mongo entity",
                            path,
                            &LayerTemplate::MongoEntity(MongoEntityContext::new(pkg, spec)),
                            opts.overwrite,
                        )
                    },
                );
                self.record(
                    report,
                    "mongo entity registration",
                    paths::mongo_inject_file(dir),
                    |path| {
                        self.insert_step(
                            "mongo entity registration",
                            path,
                            &injections::mongo_entity_registration(name),
                        )
                    },
                );
                self.record(
                    report,
                    "mongo model",
                    paths::mongo_model_file(dir, name),
                    |path| {
                        self.write_step(
                            "mongo model",
                            path,
                            &LayerTemplate::MongoModel(LayerContext::new(pkg, spec)),
                            opts.overwrite,
                        )
                    },
                );
                self.record(
                    report,
                    "mongo model registration",
                    paths::mongo_model_inject_file(dir),
                    |path| {
                        self.insert_step(
                            "mongo model registration",
                            path,
                            &injections::model_registration(name),
                        )
                    },
                );
            }
        }
    }

    /// Run a best-effort step; failures are folded into the report.
    fn record<F>(&self, report: &mut GenerateReport, description: &str, path: PathBuf, step: F)
    where
        F: FnOnce(PathBuf) -> LayergenResult<StepReport>,
    {
        match step(path.clone()) {
            Ok(step) => report.steps.push(step),
            Err(err) => {
                warn!(step = description, %err, "Step failed, continuing");
                report.steps.push(StepReport {
                    description: description.to_string(),
                    path,
                    outcome: StepOutcome::Failed(err.to_string()),
                    format_warning: None,
                });
            }
        }
    }

    /// Render a template and write it as a new file.
    fn write_step(
        &self,
        description: &str,
        path: PathBuf,
        template: &LayerTemplate,
        overwrite: bool,
    ) -> LayergenResult<StepReport> {
        let content = self.renderer.render(template)?;
        self.filesystem.write_new(&path, &content, overwrite)?;
        info!(template = template.kind(), path = %path.display(), "File written");
        Ok(StepReport {
            description: description.to_string(),
            path: path.clone(),
            outcome: StepOutcome::Written,
            format_warning: self.run_formatter(&path),
        })
    }

    /// Splice a registration into an existing file via its anchor rule.
    fn insert_step(
        &self,
        description: &str,
        path: PathBuf,
        rule: &AnchorRule,
    ) -> LayergenResult<StepReport> {
        let input = self.filesystem.read_to_string(&path)?;
        match anchor::apply(rule, &input)? {
            InsertOutcome::Inserted(content) => {
                self.filesystem.replace(&path, &content)?;
                info!(path = %path.display(), "Registration inserted");
                Ok(StepReport {
                    description: description.to_string(),
                    path: path.clone(),
                    outcome: StepOutcome::Inserted,
                    format_warning: self.run_formatter(&path),
                })
            }
            InsertOutcome::AlreadyPresent => {
                info!(path = %path.display(), "Registration already present");
                Ok(StepReport {
                    description: description.to_string(),
                    path,
                    outcome: StepOutcome::SkippedExisting,
                    format_warning: None,
                })
            }
        }
    }

    /// Formatting is advisory: the file is already on disk either way.
    fn run_formatter(&self, path: &Path) -> Option<String> {
        match self.formatter.format(path) {
            Ok(()) => None,
            Err(err) => {
                warn!(path = %path.display(), %err, "Formatting failed");
                Some(err.to_string())
            }
        }
    }
}
