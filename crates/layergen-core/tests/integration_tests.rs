//! Integration tests for layergen-core.
//!
//! The driven ports are stubbed in-process so the full generation walk can
//! run without touching disk or shelling out to gofmt.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use layergen_core::{
    application::{
        GenerateOptions, GenerateService, StepOutcome,
        ports::{Filesystem, SourceFormatter, TemplateRenderer},
    },
    domain::{EntitySpec, FieldSpec, LayerTemplate, Module, ModuleSet, Storage},
    error::{LayergenError, LayergenResult},
};
use layergen_core::application::ApplicationError;

/// In-memory filesystem shared between the service and the assertions.
#[derive(Clone, Default)]
struct FakeFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl FakeFs {
    fn seed(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl Filesystem for FakeFs {
    fn read_to_string(&self, path: &Path) -> LayergenResult<String> {
        self.get(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_new(&self, path: &Path, content: &str, overwrite: bool) -> LayergenResult<()> {
        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) && !overwrite {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn replace(&self, path: &Path, content: &str) -> LayergenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Renderer stub: one recognizable line per template kind.
struct FakeRenderer;

impl TemplateRenderer for FakeRenderer {
    fn render(&self, template: &LayerTemplate) -> LayergenResult<String> {
        Ok(format!("package stub\n// {}\n", template.kind()))
    }
}

struct NoopFormatter;

impl SourceFormatter for NoopFormatter {
    fn format(&self, _path: &Path) -> LayergenResult<()> {
        Ok(())
    }
}

struct FailingFormatter;

impl SourceFormatter for FailingFormatter {
    fn format(&self, path: &Path) -> LayergenResult<()> {
        Err(ApplicationError::FormatFailed {
            path: path.to_path_buf(),
            reason: "gofmt not found".into(),
        }
        .into())
    }
}

fn seed_project(fs: &FakeFs) {
    fs.seed(
        "app/internal/app/model/impl/gorm/gorm.go",
        "package gorm\n\nfunc AutoMigrate(db *gorm.DB) error {\n\treturn db.AutoMigrate(\n\t).Error\n}\n",
    );
    fs.seed(
        "app/internal/app/model/impl/gorm/model/model.go",
        "package model\n\nvar ModelSet = wire.NewSet(\n)\n",
    );
    fs.seed(
        "app/internal/app/model/impl/mongo/mongo.go",
        "package mongo\n\nfunc Init(ctx context.Context) error {\n\treturn createIndexes(\n\t)\n}\n",
    );
    fs.seed(
        "app/internal/app/model/impl/mongo/model/model.go",
        "package model\n\nvar ModelSet = wire.NewSet(\n)\n",
    );
    fs.seed(
        "app/internal/app/bll/impl/impl.go",
        "package impl\n\nvar BllSet = wire.NewSet(\n)\n",
    );
    fs.seed(
        "app/internal/app/api/api.go",
        "package api\n\nvar APISet = wire.NewSet(\n)\n",
    );
    fs.seed(
        "app/internal/app/api/mock/mock.go",
        "package mock\n\nvar MockSet = wire.NewSet(\n)\n",
    );
    fs.seed(
        "app/internal/app/router/r_api.go",
        "package router\n\nfunc (a *Router) RegisterAPI(app *gin.Engine) {\n\
         \tg := app.Group(\"/api\")\n\
         \tv1 := g.Group(\"/v1\")\n\
         \t{\n\
         \t\t// generated route registrations below (do not remove this line)\n\
         \t}\n\
         }\n",
    );
    fs.seed(
        "app/internal/app/router/router.go",
        "package router\n\ntype Router struct {\n\tAuth auther.Auther\n}\n",
    );
}

fn options(storage: Storage, modules: ModuleSet, overwrite: bool) -> GenerateOptions {
    GenerateOptions {
        dir: PathBuf::from("app"),
        pkg_name: "github.com/acme/app".into(),
        storage,
        modules,
        overwrite,
    }
}

fn order_spec() -> EntitySpec {
    EntitySpec::with_fields(
        "Order",
        "order management",
        vec![
            FieldSpec::new("Code", "string").required(),
            FieldSpec::new("Total", "float64"),
        ],
    )
    .unwrap()
}

fn service(fs: &FakeFs) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()), Box::new(FakeRenderer), Box::new(NoopFormatter))
}

#[test]
fn full_gorm_walk_writes_every_layer() {
    let fs = FakeFs::default();
    seed_project(&fs);

    let report = service(&fs)
        .generate(&order_spec(), &options(Storage::Gorm, ModuleSet::all(), false))
        .unwrap();

    assert!(!report.has_failures(), "steps: {:?}", report.steps);

    for path in [
        "app/internal/app/schema/s_order.go",
        "app/internal/app/model/m_order.go",
        "app/internal/app/model/impl/gorm/entity/e_order.go",
        "app/internal/app/model/impl/gorm/model/m_order.go",
        "app/internal/app/bll/b_order.go",
        "app/internal/app/bll/impl/bll/b_order.go",
        "app/internal/app/api/a_order.go",
        "app/internal/app/api/mock/a_order.go",
    ] {
        assert!(fs.exists(Path::new(path)), "missing {path}");
    }

    let migrate = fs.get("app/internal/app/model/impl/gorm/gorm.go").unwrap();
    assert!(migrate.contains("\t\tnew(entity.Order),\n\t).Error"));
    let bll = fs.get("app/internal/app/bll/impl/impl.go").unwrap();
    assert!(bll.contains("\tbll.OrderSet,\n)"));
    let routes = fs.get("app/internal/app/router/r_api.go").unwrap();
    assert!(routes.contains("gOrder := v1.Group(\"orders\")"));
    assert!(routes.contains("gOrder.DELETE(\":id\", a.OrderAPI.Delete)"));
    let router = fs.get("app/internal/app/router/router.go").unwrap();
    assert!(router.contains("\tOrderAPI *api.OrderAPI\n}"));
}

#[test]
fn mongo_walk_uses_mongo_paths() {
    let fs = FakeFs::default();
    seed_project(&fs);

    let report = service(&fs)
        .generate(
            &order_spec(),
            &options(Storage::Mongo, ModuleSet::of([Module::Model]), false),
        )
        .unwrap();

    assert!(!report.has_failures(), "steps: {:?}", report.steps);
    assert!(fs.exists(Path::new("app/internal/app/model/impl/mongo/entity/e_order.go")));
    assert!(fs.exists(Path::new("app/internal/app/model/impl/mongo/model/m_order.go")));
    assert!(!fs.exists(Path::new("app/internal/app/model/impl/gorm/entity/e_order.go")));

    let indexes = fs.get("app/internal/app/model/impl/mongo/mongo.go").unwrap();
    assert!(indexes.contains("\t\tnew(entity.Order),\n\t)"));
}

#[test]
fn existing_schema_aborts_the_run() {
    let fs = FakeFs::default();
    seed_project(&fs);
    fs.seed("app/internal/app/schema/s_order.go", "package schema\n");

    let err = service(&fs)
        .generate(&order_spec(), &options(Storage::Gorm, ModuleSet::all(), false))
        .unwrap_err();

    assert!(matches!(
        err,
        LayergenError::Application(ApplicationError::AlreadyExists { .. })
    ));
    // Nothing after the schema step ran.
    assert!(!fs.exists(Path::new("app/internal/app/model/m_order.go")));
    // The existing file was left alone.
    assert_eq!(
        fs.get("app/internal/app/schema/s_order.go").unwrap(),
        "package schema\n"
    );
}

#[test]
fn rerun_with_overwrite_skips_existing_registrations() {
    let fs = FakeFs::default();
    seed_project(&fs);
    let svc = service(&fs);

    svc.generate(&order_spec(), &options(Storage::Gorm, ModuleSet::all(), false))
        .unwrap();
    let before = fs.get("app/internal/app/model/impl/gorm/gorm.go").unwrap();

    let report = svc
        .generate(&order_spec(), &options(Storage::Gorm, ModuleSet::all(), true))
        .unwrap();

    assert!(!report.has_failures(), "steps: {:?}", report.steps);
    let skipped = report
        .steps
        .iter()
        .filter(|s| s.outcome == StepOutcome::SkippedExisting)
        .count();
    // gorm entity, gorm model, bll, api, mock, two router insertions.
    assert_eq!(skipped, 7);
    assert_eq!(
        fs.get("app/internal/app/model/impl/gorm/gorm.go").unwrap(),
        before
    );
}

#[test]
fn missing_anchor_is_recorded_but_does_not_abort() {
    let fs = FakeFs::default();
    seed_project(&fs);
    // Break the router anchor.
    fs.seed("app/internal/app/router/r_api.go", "package router\n");

    let report = service(&fs)
        .generate(&order_spec(), &options(Storage::Gorm, ModuleSet::all(), false))
        .unwrap();

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].description, "router routes");
    assert!(matches!(failed[0].outcome, StepOutcome::Failed(ref msg)
        if msg.contains("generated route registrations")));
    // The later router-field step still ran.
    let router = fs.get("app/internal/app/router/router.go").unwrap();
    assert!(router.contains("OrderAPI *api.OrderAPI"));
}

#[test]
fn module_subset_limits_the_walk() {
    let fs = FakeFs::default();
    seed_project(&fs);

    let report = service(&fs)
        .generate(
            &order_spec(),
            &options(
                Storage::Gorm,
                ModuleSet::of([Module::Schema, Module::Bll]),
                false,
            ),
        )
        .unwrap();

    assert!(!report.has_failures(), "steps: {:?}", report.steps);
    assert!(fs.exists(Path::new("app/internal/app/schema/s_order.go")));
    assert!(fs.exists(Path::new("app/internal/app/bll/b_order.go")));
    assert!(!fs.exists(Path::new("app/internal/app/api/a_order.go")));
    assert!(!fs.exists(Path::new("app/internal/app/model/m_order.go")));
}

#[test]
fn format_failure_is_a_warning_not_an_error() {
    let fs = FakeFs::default();
    seed_project(&fs);
    let svc = GenerateService::new(
        Box::new(fs.clone()),
        Box::new(FakeRenderer),
        Box::new(FailingFormatter),
    );

    let report = svc
        .generate(
            &order_spec(),
            &options(Storage::Gorm, ModuleSet::of([Module::Schema]), false),
        )
        .unwrap();

    assert_eq!(report.steps.len(), 1);
    let step = &report.steps[0];
    assert_eq!(step.outcome, StepOutcome::Written);
    assert!(step.format_warning.as_deref().unwrap().contains("gofmt"));
    assert!(fs.exists(Path::new("app/internal/app/schema/s_order.go")));
}
