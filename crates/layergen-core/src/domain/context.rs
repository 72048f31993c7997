//! Strongly typed template contexts.
//!
//! One context struct per template family, built fresh per rendered file and
//! discarded afterwards. The renderer adapter binds these to compile-time
//! checked templates, so a missing placeholder is a build error rather than
//! a runtime failure.

use crate::domain::entity::EntitySpec;
use crate::domain::fields::{
    GormFieldView, MongoFieldView, SchemaFieldView, gorm_fields, mongo_fields, schema_fields,
};
use crate::domain::naming::{lower_underscore, plural};

/// Context for the schema (request/response object) template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaContext {
    pub pkg_name: String,
    pub name: String,
    pub plural_name: String,
    pub comment: String,
    pub fields: Vec<SchemaFieldView>,
}

impl SchemaContext {
    pub fn new(pkg_name: &str, spec: &EntitySpec) -> Self {
        Self {
            pkg_name: pkg_name.to_string(),
            name: spec.name.clone(),
            plural_name: plural(&spec.name),
            comment: spec.comment.clone(),
            fields: schema_fields(&spec.fields),
        }
    }
}

/// Context for the gorm entity template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GormEntityContext {
    pub pkg_name: String,
    pub name: String,
    pub plural_name: String,
    pub snake_name: String,
    pub comment: String,
    pub fields: Vec<GormFieldView>,
}

impl GormEntityContext {
    pub fn new(pkg_name: &str, spec: &EntitySpec) -> Self {
        Self {
            pkg_name: pkg_name.to_string(),
            name: spec.name.clone(),
            plural_name: plural(&spec.name),
            snake_name: lower_underscore(&spec.name),
            comment: spec.comment.clone(),
            fields: gorm_fields(&spec.fields),
        }
    }
}

/// Context for the mongo entity template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoEntityContext {
    pub pkg_name: String,
    pub name: String,
    pub plural_name: String,
    pub snake_name: String,
    pub comment: String,
    pub fields: Vec<MongoFieldView>,
}

impl MongoEntityContext {
    pub fn new(pkg_name: &str, spec: &EntitySpec) -> Self {
        Self {
            pkg_name: pkg_name.to_string(),
            name: spec.name.clone(),
            plural_name: plural(&spec.name),
            snake_name: lower_underscore(&spec.name),
            comment: spec.comment.clone(),
            fields: mongo_fields(&spec.fields),
        }
    }
}

/// Shared context for the field-less layer templates (model interface and
/// impls, bll, api, mock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerContext {
    pub pkg_name: String,
    pub name: String,
    pub plural_name: String,
    pub snake_name: String,
    /// Route-path form of the plural name, e.g. `menu_actions`.
    pub plural_snake_name: String,
    pub comment: String,
}

impl LayerContext {
    pub fn new(pkg_name: &str, spec: &EntitySpec) -> Self {
        Self {
            pkg_name: pkg_name.to_string(),
            name: spec.name.clone(),
            plural_name: plural(&spec.name),
            snake_name: lower_underscore(&spec.name),
            plural_snake_name: lower_underscore(&plural(&spec.name)),
            comment: spec.comment.clone(),
        }
    }
}

/// A layer template paired with its context, handed to the renderer port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerTemplate {
    Schema(SchemaContext),
    ModelIface(LayerContext),
    GormEntity(GormEntityContext),
    GormModel(LayerContext),
    MongoEntity(MongoEntityContext),
    MongoModel(LayerContext),
    BllIface(LayerContext),
    BllImpl(LayerContext),
    Api(LayerContext),
    ApiMock(LayerContext),
}

impl LayerTemplate {
    /// Short identifier used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema",
            Self::ModelIface(_) => "model-iface",
            Self::GormEntity(_) => "gorm-entity",
            Self::GormModel(_) => "gorm-model",
            Self::MongoEntity(_) => "mongo-entity",
            Self::MongoModel(_) => "mongo-model",
            Self::BllIface(_) => "bll-iface",
            Self::BllImpl(_) => "bll-impl",
            Self::Api(_) => "api",
            Self::ApiMock(_) => "api-mock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::FieldSpec;

    fn user_spec() -> EntitySpec {
        EntitySpec::with_fields(
            "Category",
            "category management",
            vec![FieldSpec::new("Name", "string").required()],
        )
        .unwrap()
    }

    #[test]
    fn schema_context_derives_casing() {
        let ctx = SchemaContext::new("github.com/acme/app", &user_spec());
        assert_eq!(ctx.plural_name, "Categories");
        assert_eq!(ctx.fields.len(), 1);
    }

    #[test]
    fn layer_context_has_snake_name() {
        let ctx = LayerContext::new("github.com/acme/app", &user_spec());
        assert_eq!(ctx.snake_name, "category");
        assert_eq!(ctx.plural_snake_name, "categories");
        assert_eq!(ctx.comment, "category management");
    }

    #[test]
    fn template_kind_names_are_stable() {
        let spec = user_spec();
        let t = LayerTemplate::Schema(SchemaContext::new("p", &spec));
        assert_eq!(t.kind(), "schema");
        let t = LayerTemplate::ApiMock(LayerContext::new("p", &spec));
        assert_eq!(t.kind(), "api-mock");
    }
}
