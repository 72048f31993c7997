//! Template renderer adapters.

mod askama;

pub use askama::AskamaRenderer;
