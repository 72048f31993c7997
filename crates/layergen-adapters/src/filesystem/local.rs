//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use layergen_core::{application::ports::Filesystem, error::LayergenResult};
use tempfile::NamedTempFile;
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
///
/// `replace` goes through a sibling temp file and an atomic rename, so a
/// reader of an insertion target never sees a half-written file.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> LayergenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_new(&self, path: &Path, content: &str, overwrite: bool) -> LayergenResult<()> {
        if path.exists() && !overwrite {
            return Err(layergen_core::application::ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        debug!(path = %path.display(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn replace(&self, path: &Path, content: &str) -> LayergenResult<()> {
        // Same-directory temp file keeps the rename on one filesystem.
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let tmp =
            NamedTempFile::new_in(dir).map_err(|e| map_io_error(path, e, "create temp file"))?;
        std::fs::write(tmp.path(), content)
            .map_err(|e| map_io_error(tmp.path(), e, "write temp file"))?;
        // Temp files are created 0600; carry the target's own mode over so
        // the rename doesn't change who can read it.
        let perms = std::fs::metadata(path)
            .map_err(|e| map_io_error(path, e, "read file metadata"))?
            .permissions();
        std::fs::set_permissions(tmp.path(), perms)
            .map_err(|e| map_io_error(tmp.path(), e, "set temp file permissions"))?;
        debug!(path = %path.display(), "Replacing file");
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> layergen_core::error::LayergenError {
    use layergen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
