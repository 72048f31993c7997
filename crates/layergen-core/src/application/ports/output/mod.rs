//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `layergen-adapters` crate provides implementations.

use crate::domain::LayerTemplate;
use crate::error::LayergenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `layergen_adapters::filesystem::LocalFilesystem` (production)
/// - `layergen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read the full contents of an existing file.
    fn read_to_string(&self, path: &Path) -> LayergenResult<String>;

    /// Create a new file with the given content, creating missing parent
    /// directories. Fails with `ApplicationError::AlreadyExists` if the path
    /// exists and `overwrite` is false; the existing content must be left
    /// byte-identical in that case.
    fn write_new(&self, path: &Path, content: &str, overwrite: bool) -> LayergenResult<()>;

    /// Replace the contents of an existing file in one atomic step. Readers
    /// must never observe a partially written file.
    fn replace(&self, path: &Path, content: &str) -> LayergenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for rendering a layer template with its typed context.
///
/// Implemented by:
/// - `layergen_adapters::renderer::AskamaRenderer` (compile-time templates)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template to source text.
    fn render(&self, template: &LayerTemplate) -> LayergenResult<String>;
}

/// Port for canonical source formatting after a write or insert.
///
/// Treated as an external collaborator: failures are surfaced as warnings by
/// the caller, never as fatal errors.
///
/// Implemented by:
/// - `layergen_adapters::formatter::GofmtFormatter` (shells out to gofmt)
/// - `layergen_adapters::formatter::NoopFormatter` (testing)
pub trait SourceFormatter: Send + Sync {
    /// Rewrite the file at `path` into canonical formatting.
    fn format(&self, path: &Path) -> LayergenResult<()>;
}
