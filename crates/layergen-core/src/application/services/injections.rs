//! Anchor rules for every splice point in the generated application.
//!
//! One constructor per insertion; the service pairs each rule with the
//! target file from `paths`. The generated projects carry these anchors
//! from the project template, so the patterns are stable.

use crate::domain::anchor::{AnchorRule, Placement};
use crate::domain::naming::{lower_underscore, plural};

/// Register the gorm entity in the `db.AutoMigrate(...)` list.
pub fn gorm_entity_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "return db.AutoMigrate(",
        ").Error",
        format!("\t\tnew(entity.{name}),"),
        Placement::BeforeEnd,
    )
}

/// Register the mongo entity in the index-creation list.
pub fn mongo_entity_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "return createIndexes(",
        ")",
        format!("\t\tnew(entity.{name}),"),
        Placement::BeforeEnd,
    )
}

/// Register the storage model's wire set in `ModelSet`.
pub fn model_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "var ModelSet = wire.NewSet(",
        ")",
        format!("\t{name}Set,"),
        Placement::BeforeEnd,
    )
}

/// Register the business-logic wire set in `BllSet`.
pub fn bll_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "var BllSet = wire.NewSet(",
        ")",
        format!("\tbll.{name}Set,"),
        Placement::BeforeEnd,
    )
}

/// Register the API wire set in `APISet`.
pub fn api_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "var APISet = wire.NewSet(",
        ")",
        format!("\t{name}APISet,"),
        Placement::BeforeEnd,
    )
}

/// Register the mock API wire set in `MockSet`.
pub fn mock_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "var MockSet = wire.NewSet(",
        ")",
        format!("\t{name}MockSet,"),
        Placement::BeforeEnd,
    )
}

/// Append the route-group block below the generated-routes marker.
///
/// The snippet is flat on purpose: nested braces would collide with the
/// end-pattern scan, and gofmt does not care either way.
pub fn router_api_registration(name: &str) -> AnchorRule {
    let group = lower_underscore(&plural(name));
    let var = format!("g{name}");
    let snippet = format!(
        "\t\t{var} := v1.Group(\"{group}\")\n\
         \t\t{var}.GET(\"\", a.{name}API.Query)\n\
         \t\t{var}.GET(\":id\", a.{name}API.Get)\n\
         \t\t{var}.POST(\"\", a.{name}API.Create)\n\
         \t\t{var}.PUT(\":id\", a.{name}API.Update)\n\
         \t\t{var}.DELETE(\":id\", a.{name}API.Delete)"
    );
    AnchorRule::new(
        "// generated route registrations below (do not remove this line)",
        "}",
        snippet,
        Placement::AfterStart,
    )
    .with_dedup(format!("v1.Group(\"{group}\")"))
}

/// Add the API handler field to the `Router` struct.
pub fn router_field_registration(name: &str) -> AnchorRule {
    AnchorRule::new(
        "type Router struct {",
        "}",
        format!("\t{name}API *api.{name}API"),
        Placement::BeforeEnd,
    )
}
