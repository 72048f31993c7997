//! Field mapper: declarative field specs to per-layer field views.
//!
//! Pure transformation, no side effects. Each view carries the fully built
//! struct tag so the templates only interpolate.
//!
//! Defaulting rules:
//! - JSON key: `json_tag` override, else the lower_underscore field name;
//! - binding tag: `required` first when the field is required, comma-joined
//!   with any explicit `binding_options`; omitted entirely when empty;
//! - gorm tag: `column:<lower_underscore>;` unless `gorm_options` replaces
//!   the whole tag body;
//! - bson key: always the lower_underscore field name.

use serde::Serialize;

use crate::domain::entity::FieldSpec;
use crate::domain::naming::lower_underscore;

/// A schema-layer field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFieldView {
    pub name: String,
    pub go_type: String,
    /// Backtick-delimited struct tag, e.g. `` `json:"email" binding:"required"` ``.
    pub tag: String,
    pub comment: String,
}

/// A gorm-entity field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GormFieldView {
    pub name: String,
    pub go_type: String,
    pub tag: String,
    pub comment: String,
}

/// A mongo-entity field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MongoFieldView {
    pub name: String,
    pub go_type: String,
    pub tag: String,
    pub comment: String,
}

/// Map field specs to schema-layer views.
pub fn schema_fields(fields: &[FieldSpec]) -> Vec<SchemaFieldView> {
    fields
        .iter()
        .map(|f| SchemaFieldView {
            name: f.name.clone(),
            go_type: f.go_type.clone(),
            tag: schema_tag(f),
            comment: f.comment.clone(),
        })
        .collect()
}

/// Map field specs to gorm-entity views.
pub fn gorm_fields(fields: &[FieldSpec]) -> Vec<GormFieldView> {
    fields
        .iter()
        .map(|f| GormFieldView {
            name: f.name.clone(),
            go_type: f.go_type.clone(),
            tag: gorm_tag(f),
            comment: f.comment.clone(),
        })
        .collect()
}

/// Map field specs to mongo-entity views.
pub fn mongo_fields(fields: &[FieldSpec]) -> Vec<MongoFieldView> {
    fields
        .iter()
        .map(|f| {
            let key = lower_underscore(&f.name);
            MongoFieldView {
                name: f.name.clone(),
                go_type: f.go_type.clone(),
                tag: format!("`bson:\"{key}\" json:\"{key}\"`"),
                comment: f.comment.clone(),
            }
        })
        .collect()
}

fn schema_tag(f: &FieldSpec) -> String {
    let json = f
        .json_tag
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| lower_underscore(&f.name));

    let mut binding = String::new();
    if f.required {
        binding.push_str("required");
    }
    if let Some(opts) = &f.binding_options {
        if !opts.is_empty() {
            if !binding.is_empty() {
                binding.push(',');
            }
            binding.push_str(opts);
        }
    }

    if binding.is_empty() {
        format!("`json:\"{json}\"`")
    } else {
        format!("`json:\"{json}\" binding:\"{binding}\"`")
    }
}

fn gorm_tag(f: &FieldSpec) -> String {
    match &f.gorm_options {
        Some(opts) if !opts.is_empty() => format!("`gorm:\"{opts}\"`"),
        _ => format!("`gorm:\"column:{};\"`", lower_underscore(&f.name)),
    }
}
