//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use layergen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LayergenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can keep a handle while
/// the service owns a boxed clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files.read().unwrap().keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> LayergenResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_new(&self, path: &Path, content: &str, overwrite: bool) -> LayergenResult<()> {
        let mut files = self.files.write().unwrap();
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
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.insert("a.go", "package a\n");
        assert!(fs.exists(Path::new("a.go")));
    }

    #[test]
    fn write_new_respects_overwrite_flag() {
        let fs = MemoryFilesystem::new();
        fs.write_new(Path::new("a.go"), "one", false).unwrap();
        assert!(fs.write_new(Path::new("a.go"), "two", false).is_err());
        fs.write_new(Path::new("a.go"), "two", true).unwrap();
        assert_eq!(fs.read_file(Path::new("a.go")).unwrap(), "two");
    }
}
