//! Infrastructure adapters for Layergen.
//!
//! This crate implements the ports defined in `layergen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod formatter;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::{GofmtFormatter, NoopFormatter};
pub use renderer::AskamaRenderer;
