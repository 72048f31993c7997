//! Application layer: use-case orchestration over the domain.
//!
//! The only service is [`GenerateService`], which walks one entity through
//! the fixed layer-generation sequence using the driven ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::generate_service::{
    GenerateOptions, GenerateReport, GenerateService, StepOutcome, StepReport,
};
