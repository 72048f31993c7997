//! Application ports (traits).

pub mod output;

pub use output::{Filesystem, SourceFormatter, TemplateRenderer};
