//! Application services.

pub mod generate_service;
pub mod injections;
pub mod paths;

pub use generate_service::GenerateService;
