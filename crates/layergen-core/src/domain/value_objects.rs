//! Domain value objects: Storage, Module, ModuleSet.
//!
//! Pure value types — `Copy` where possible, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Storage ──────────────────────────────────────────────────────────────────

/// A supported storage backend for the data-model layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    #[default]
    Gorm,
    Mongo,
}

impl Storage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gorm => "gorm",
            Self::Mongo => "mongo",
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Storage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gorm" | "sql" => Ok(Self::Gorm),
            "mongo" | "mongodb" => Ok(Self::Mongo),
            other => Err(DomainError::UnknownStorage(other.into())),
        }
    }
}

// ── Module ───────────────────────────────────────────────────────────────────

/// One generatable layer of the target application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Schema,
    Model,
    Bll,
    Api,
    Mock,
    Router,
}

impl Module {
    pub const ALL: [Module; 6] = [
        Self::Schema,
        Self::Model,
        Self::Bll,
        Self::Api,
        Self::Mock,
        Self::Router,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Model => "model",
            Self::Bll => "bll",
            Self::Api => "api",
            Self::Mock => "mock",
            Self::Router => "router",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "schema" => Ok(Self::Schema),
            "model" => Ok(Self::Model),
            "bll" => Ok(Self::Bll),
            "api" => Ok(Self::Api),
            "mock" => Ok(Self::Mock),
            "router" => Ok(Self::Router),
            other => Err(DomainError::UnknownModule(other.into())),
        }
    }
}

// ── ModuleSet ────────────────────────────────────────────────────────────────

/// The subset of layers selected for one generation run.
///
/// Parsed from a comma list; an empty string or `all` selects every module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSet {
    selected: Option<Vec<Module>>,
}

impl ModuleSet {
    /// Every module.
    pub fn all() -> Self {
        Self { selected: None }
    }

    /// An explicit subset.
    pub fn of(modules: impl IntoIterator<Item = Module>) -> Self {
        Self {
            selected: Some(modules.into_iter().collect()),
        }
    }

    pub fn contains(&self, module: Module) -> bool {
        match &self.selected {
            None => true,
            Some(list) => list.contains(&module),
        }
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for ModuleSet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        let modules = s
            .split(',')
            .map(|part| part.trim().parse::<Module>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::of(modules))
    }
}

impl fmt::Display for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selected {
            None => f.write_str("all"),
            Some(list) => {
                let names: Vec<&str> = list.iter().map(Module::as_str).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_from_str_accepts_aliases() {
        assert_eq!("gorm".parse::<Storage>().unwrap(), Storage::Gorm);
        assert_eq!("SQL".parse::<Storage>().unwrap(), Storage::Gorm);
        assert_eq!("mongodb".parse::<Storage>().unwrap(), Storage::Mongo);
        assert!("redis".parse::<Storage>().is_err());
    }

    #[test]
    fn storage_default_is_gorm() {
        assert_eq!(Storage::default(), Storage::Gorm);
    }

    #[test]
    fn module_round_trips_through_str() {
        for m in Module::ALL {
            assert_eq!(m.as_str().parse::<Module>().unwrap(), m);
        }
    }

    #[test]
    fn module_set_all_contains_everything() {
        let set = ModuleSet::all();
        for m in Module::ALL {
            assert!(set.contains(m));
        }
    }

    #[test]
    fn module_set_parses_comma_list() {
        let set: ModuleSet = "schema, model,router".parse().unwrap();
        assert!(set.contains(Module::Schema));
        assert!(set.contains(Module::Model));
        assert!(set.contains(Module::Router));
        assert!(!set.contains(Module::Api));
    }

    #[test]
    fn module_set_empty_and_all_mean_everything() {
        assert_eq!("".parse::<ModuleSet>().unwrap(), ModuleSet::all());
        assert_eq!("All".parse::<ModuleSet>().unwrap(), ModuleSet::all());
    }

    #[test]
    fn module_set_rejects_unknown_names() {
        assert!(matches!(
            "schema,frontend".parse::<ModuleSet>(),
            Err(DomainError::UnknownModule(name)) if name == "frontend"
        ));
    }

    #[test]
    fn module_set_display() {
        assert_eq!(ModuleSet::all().to_string(), "all");
        assert_eq!(
            ModuleSet::of([Module::Schema, Module::Bll]).to_string(),
            "schema,bll"
        );
    }
}
