//! Field-definition file loading.
//!
//! The file is YAML with a top-level `name`, `comment` and `fields` list.
//! `--name` / `--comment` flags win over file values when both are given.
//!
//! ```yaml
//! name: Order
//! comment: order management
//! fields:
//!   - name: Code
//!     type: string
//!     required: true
//!     comment: order code
//!   - name: Total
//!     type: float64
//!     gorm_options: "column:total;type:decimal(10,2);"
//! ```

use std::path::Path;

use serde::Deserialize;

use layergen_core::domain::{EntitySpec, FieldSpec};

use crate::error::{CliError, CliResult};

/// On-disk shape of the field file. Mapped into the domain's `EntitySpec`
/// after merging with CLI flags.
#[derive(Debug, Deserialize)]
pub struct FieldFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldFileEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FieldFileEntry {
    pub name: String,
    /// Go type of the field; `type` in the file.
    #[serde(rename = "type")]
    pub go_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub json_tag: Option<String>,
    #[serde(default)]
    pub binding_options: Option<String>,
    #[serde(default)]
    pub gorm_options: Option<String>,
}

impl FieldFile {
    /// Read and parse a field file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FieldFile {
            path: path.to_path_buf(),
            message: format!("cannot read file: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_yaml::from_str(&content).map_err(|e| CliError::FieldFile {
            path: path.to_path_buf(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }
}

/// Merge CLI flags with an optional field file into the entity spec.
///
/// Flag values win; the file fills in whatever the flags left out. A name
/// must come from one of the two (clap enforces this for the flag-only
/// path).
pub fn build_entity_spec(
    name: Option<&str>,
    comment: &str,
    file: Option<&FieldFile>,
) -> CliResult<EntitySpec> {
    let name = name
        .map(str::to_string)
        .or_else(|| file.and_then(|f| f.name.clone()))
        .ok_or_else(|| CliError::InvalidInput {
            message: "an entity name is required: pass --name or put `name:` in the field file"
                .into(),
        })?;

    let comment = if comment.is_empty() {
        file.and_then(|f| f.comment.clone()).unwrap_or_default()
    } else {
        comment.to_string()
    };

    let fields = file
        .map(|f| f.fields.iter().map(to_field_spec).collect())
        .unwrap_or_default();

    EntitySpec::with_fields(name, comment, fields)
        .map_err(|e| CliError::Core(e.into()))
}

fn to_field_spec(entry: &FieldFileEntry) -> FieldSpec {
    FieldSpec {
        name: entry.name.clone(),
        comment: entry.comment.clone(),
        go_type: entry.go_type.clone(),
        required: entry.required,
        json_tag: entry.json_tag.clone(),
        binding_options: entry.binding_options.clone(),
        gorm_options: entry.gorm_options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_YAML: &str = "\
name: Order
comment: order management
fields:
  - name: Code
    type: string
    required: true
    comment: order code
  - name: Total
    type: float64
    gorm_options: \"column:total;type:decimal(10,2);\"
";

    fn parse(yaml: &str) -> FieldFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn parses_full_field_file() {
        let file = parse(ORDER_YAML);
        assert_eq!(file.name.as_deref(), Some("Order"));
        assert_eq!(file.fields.len(), 2);
        assert_eq!(file.fields[0].go_type, "string");
        assert!(file.fields[0].required);
        assert_eq!(
            file.fields[1].gorm_options.as_deref(),
            Some("column:total;type:decimal(10,2);")
        );
    }

    #[test]
    fn cli_name_wins_over_file_name() {
        let file = parse(ORDER_YAML);
        let spec = build_entity_spec(Some("Invoice"), "", Some(&file)).unwrap();
        assert_eq!(spec.name, "Invoice");
        // Comment still comes from the file when the flag is empty.
        assert_eq!(spec.comment, "order management");
        assert_eq!(spec.fields.len(), 2);
    }

    #[test]
    fn file_name_used_when_flag_absent() {
        let file = parse(ORDER_YAML);
        let spec = build_entity_spec(None, "", Some(&file)).unwrap();
        assert_eq!(spec.name, "Order");
    }

    #[test]
    fn missing_name_everywhere_is_invalid_input() {
        let file = parse("fields: []\n");
        let err = build_entity_spec(None, "", Some(&file)).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn flags_only_path_needs_no_file() {
        let spec = build_entity_spec(Some("User"), "user management", None).unwrap();
        assert_eq!(spec.name, "User");
        assert!(spec.fields.is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_field_file_error() {
        let err = serde_yaml::from_str::<FieldFile>("fields: {not: a list}")
            .map_err(|e| CliError::FieldFile {
                path: "x.yaml".into(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
