//! Layergen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Layergen
//! module generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          layergen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerateService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Render, Format)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    layergen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, AskamaRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntitySpec, AnchorRule, FieldViews)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use layergen_core::{
//!     application::{GenerateOptions, GenerateService},
//!     domain::{EntitySpec, ModuleSet, Storage},
//! };
//!
//! // 1. Describe the entity
//! let spec = EntitySpec::new("User", "user management")?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(fs, renderer, formatter);
//! let report = service.generate(&spec, &options)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerateReport, GenerateService, StepOutcome, StepReport,
        ports::{Filesystem, SourceFormatter, TemplateRenderer},
    };
    pub use crate::domain::{
        AnchorRule, EntitySpec, FieldSpec, InsertOutcome, LayerTemplate, Module, ModuleSet,
        Placement, Storage,
    };
    pub use crate::error::{LayergenError, LayergenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
