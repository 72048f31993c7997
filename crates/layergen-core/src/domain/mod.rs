//! Core domain layer for Layergen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and formatting concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable specs**: Field and entity specs never mutate after load
//! - **Functional core**: the anchor inserter transforms an immutable input
//!   sequence into a new output sequence; it never patches in place

pub mod anchor;
pub mod context;
pub mod entity;
pub mod error;
pub mod fields;
pub mod naming;
pub mod value_objects;

// Re-exports for convenience
pub use anchor::{AnchorRule, InsertOutcome, Placement};
pub use context::{
    GormEntityContext, LayerContext, LayerTemplate, MongoEntityContext, SchemaContext,
};
pub use entity::{EntitySpec, FieldSpec};
pub use error::{DomainError, ErrorCategory};
pub use fields::{GormFieldView, MongoFieldView, SchemaFieldView};
pub use value_objects::{Module, ModuleSet, Storage};
