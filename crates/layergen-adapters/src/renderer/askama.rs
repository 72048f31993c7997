//! Askama renderer adapter.
//!
//! Each layer template is a compile-time checked askama template bound to
//! its typed context from the domain. A missing placeholder or a renamed
//! context field is a build error here, not a runtime failure in the field.

use askama::Template;
use layergen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{GormEntityContext, LayerContext, LayerTemplate, MongoEntityContext, SchemaContext},
    error::LayergenResult,
};

#[derive(Template)]
#[template(path = "schema.go.txt", escape = "none")]
struct SchemaGo<'a> {
    c: &'a SchemaContext,
}

#[derive(Template)]
#[template(path = "model_iface.go.txt", escape = "none")]
struct ModelIfaceGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "entity_gorm.go.txt", escape = "none")]
struct EntityGormGo<'a> {
    c: &'a GormEntityContext,
}

#[derive(Template)]
#[template(path = "model_gorm.go.txt", escape = "none")]
struct ModelGormGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "entity_mongo.go.txt", escape = "none")]
struct EntityMongoGo<'a> {
    c: &'a MongoEntityContext,
}

#[derive(Template)]
#[template(path = "model_mongo.go.txt", escape = "none")]
struct ModelMongoGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "bll_iface.go.txt", escape = "none")]
struct BllIfaceGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "bll_impl.go.txt", escape = "none")]
struct BllImplGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "api.go.txt", escape = "none")]
struct ApiGo<'a> {
    c: &'a LayerContext,
}

#[derive(Template)]
#[template(path = "api_mock.go.txt", escape = "none")]
struct ApiMockGo<'a> {
    c: &'a LayerContext,
}

/// Renderer backed by compile-time askama templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AskamaRenderer;

impl AskamaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for AskamaRenderer {
    fn render(&self, template: &LayerTemplate) -> LayergenResult<String> {
        let rendered = match template {
            LayerTemplate::Schema(c) => SchemaGo { c }.render(),
            LayerTemplate::ModelIface(c) => ModelIfaceGo { c }.render(),
            LayerTemplate::GormEntity(c) => EntityGormGo { c }.render(),
            LayerTemplate::GormModel(c) => ModelGormGo { c }.render(),
            LayerTemplate::MongoEntity(c) => EntityMongoGo { c }.render(),
            LayerTemplate::MongoModel(c) => ModelMongoGo { c }.render(),
            LayerTemplate::BllIface(c) => BllIfaceGo { c }.render(),
            LayerTemplate::BllImpl(c) => BllImplGo { c }.render(),
            LayerTemplate::Api(c) => ApiGo { c }.render(),
            LayerTemplate::ApiMock(c) => ApiMockGo { c }.render(),
        };
        rendered.map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: format!("{} template: {}", template.kind(), e),
            }
            .into()
        })
    }
}
