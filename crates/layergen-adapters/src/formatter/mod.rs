//! Source formatter adapters.

mod gofmt;

pub use gofmt::{GofmtFormatter, NoopFormatter};
