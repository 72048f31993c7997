//! gofmt formatter adapter.
//!
//! Shells out to `gofmt -w` after a write or insert. The service treats a
//! formatting error as a warning, so a missing gofmt never blocks
//! generation.

use std::path::Path;
use std::process::Command;

use layergen_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::LayergenResult,
};
use tracing::debug;

/// Canonical Go formatting via the `gofmt` binary.
#[derive(Debug, Clone)]
pub struct GofmtFormatter {
    program: String,
}

impl GofmtFormatter {
    pub fn new() -> Self {
        Self {
            program: "gofmt".into(),
        }
    }

    /// Use a different formatter binary, e.g. `goimports`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for GofmtFormatter {
    fn format(&self, path: &Path) -> LayergenResult<()> {
        debug!(program = %self.program, path = %path.display(), "Formatting");
        let output = Command::new(&self.program)
            .arg("-w")
            .arg(path)
            .output()
            .map_err(|e| ApplicationError::FormatFailed {
                path: path.to_path_buf(),
                reason: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::FormatFailed {
                path: path.to_path_buf(),
                reason: format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            }
            .into());
        }
        Ok(())
    }
}

/// Formatter that does nothing. Used in tests and when the target project
/// is formatted by other means.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl NoopFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFormatter for NoopFormatter {
    fn format(&self, _path: &Path) -> LayergenResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_surfaces_as_format_failure() {
        let formatter = GofmtFormatter::with_program("definitely-not-a-formatter");
        let err = formatter.format(Path::new("x.go")).unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-formatter"));
    }

    #[test]
    fn noop_always_succeeds() {
        NoopFormatter::new().format(Path::new("x.go")).unwrap();
    }
}
