//! Output path conventions.
//!
//! Every generated or extended file lives at a fixed location derived from
//! the project root and the entity name. Centralised here so the service and
//! the tests agree on the layout.

use std::path::{Path, PathBuf};

use crate::domain::naming::lower_underscore;

pub fn schema_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/schema")
        .join(format!("s_{}.go", lower_underscore(name)))
}

pub fn model_iface_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/model")
        .join(format!("m_{}.go", lower_underscore(name)))
}

pub fn gorm_entity_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/model/impl/gorm/entity")
        .join(format!("e_{}.go", lower_underscore(name)))
}

/// Holds the `db.AutoMigrate(...)` registration list.
pub fn gorm_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/model/impl/gorm/gorm.go")
}

pub fn gorm_model_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/model/impl/gorm/model")
        .join(format!("m_{}.go", lower_underscore(name)))
}

/// Holds the gorm `ModelSet` wire registration list.
pub fn gorm_model_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/model/impl/gorm/model/model.go")
}

pub fn mongo_entity_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/model/impl/mongo/entity")
        .join(format!("e_{}.go", lower_underscore(name)))
}

/// Holds the mongo index-creation registration list.
pub fn mongo_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/model/impl/mongo/mongo.go")
}

pub fn mongo_model_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/model/impl/mongo/model")
        .join(format!("m_{}.go", lower_underscore(name)))
}

/// Holds the mongo `ModelSet` wire registration list.
pub fn mongo_model_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/model/impl/mongo/model/model.go")
}

pub fn bll_iface_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/bll")
        .join(format!("b_{}.go", lower_underscore(name)))
}

pub fn bll_impl_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/bll/impl/bll")
        .join(format!("b_{}.go", lower_underscore(name)))
}

/// Holds the `BllSet` wire registration list.
pub fn bll_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/bll/impl/impl.go")
}

pub fn api_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/api")
        .join(format!("a_{}.go", lower_underscore(name)))
}

/// Holds the `APISet` wire registration list.
pub fn api_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/api/api.go")
}

pub fn mock_file(dir: &Path, name: &str) -> PathBuf {
    dir.join("internal/app/api/mock")
        .join(format!("a_{}.go", lower_underscore(name)))
}

/// Holds the `MockSet` wire registration list.
pub fn mock_inject_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/api/mock/mock.go")
}

/// Holds the versioned route registrations.
pub fn router_api_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/router/r_api.go")
}

/// Holds the `Router` struct whose fields receive the API handlers.
pub fn router_file(dir: &Path) -> PathBuf {
    dir.join("internal/app/router/router.go")
}
