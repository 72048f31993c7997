//! Entity and field specifications.
//!
//! These are the user-declared inputs to a generation run. They are read
//! once (from CLI flags or a field-definition file) and never mutated.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A single field of the entity being scaffolded.
///
/// The optional tag strings override the derived defaults for their layer;
/// see `domain::fields` for the defaulting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Exported Go field name (UpperCamelCase).
    pub name: String,
    /// Trailing line comment; empty means no comment is emitted.
    #[serde(default)]
    pub comment: String,
    /// Go type of the field (e.g. `string`, `int`, `*time.Time`).
    pub go_type: String,
    /// Whether the schema binding tag includes `required`.
    #[serde(default)]
    pub required: bool,
    /// Explicit JSON key, overriding the lower_underscore default.
    #[serde(default)]
    pub json_tag: Option<String>,
    /// Extra binding options, comma-joined after `required`.
    #[serde(default)]
    pub binding_options: Option<String>,
    /// Full gorm tag body, replacing the derived `column:` default.
    #[serde(default)]
    pub gorm_options: Option<String>,
}

impl FieldSpec {
    /// A field with only a name and type; everything else defaulted.
    pub fn new(name: impl Into<String>, go_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            go_type: go_type.into(),
            required: false,
            json_tag: None,
            binding_options: None,
            gorm_options: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// The named data structure being scaffolded across layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl EntitySpec {
    /// Create an entity spec with no fields.
    ///
    /// The name must be a valid exported Go identifier; the generated
    /// templates splice it directly into type declarations.
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            comment: comment.into(),
            fields: Vec::new(),
        })
    }

    /// Create an entity spec with an ordered field list.
    pub fn with_fields(
        name: impl Into<String>,
        comment: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, DomainError> {
        let mut spec = Self::new(name, comment)?;
        for (index, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(DomainError::EmptyFieldName { index });
            }
        }
        spec.fields = fields;
        Ok(spec)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidEntityName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Err(DomainError::InvalidEntityName {
            name: name.into(),
            reason: "name must start with an uppercase letter".into(),
        });
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidEntityName {
            name: name.into(),
            reason: "name may only contain ASCII letters and digits".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["User", "Role", "MenuAction", "OAuth2Client"] {
            assert!(EntitySpec::new(name, "").is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            EntitySpec::new("", ""),
            Err(DomainError::InvalidEntityName { .. })
        ));
    }

    #[test]
    fn lowercase_name_is_invalid() {
        assert!(EntitySpec::new("user", "").is_err());
    }

    #[test]
    fn name_with_separator_is_invalid() {
        assert!(EntitySpec::new("User_Login", "").is_err());
        assert!(EntitySpec::new("User Login", "").is_err());
    }

    #[test]
    fn with_fields_rejects_empty_field_name() {
        let fields = vec![FieldSpec::new("Email", "string"), FieldSpec::new("  ", "int")];
        assert!(matches!(
            EntitySpec::with_fields("User", "", fields),
            Err(DomainError::EmptyFieldName { index: 1 })
        ));
    }

    #[test]
    fn field_builder_sets_flags() {
        let f = FieldSpec::new("Email", "string").required().with_comment("email address");
        assert!(f.required);
        assert_eq!(f.comment, "email address");
        assert_eq!(f.go_type, "string");
    }
}
