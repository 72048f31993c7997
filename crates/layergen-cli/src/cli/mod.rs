//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "layergen",
    bin_name = "layergen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layered module generation for web applications",
    long_about = "Layergen generates the schema, model, bll, api, mock and \
                  router layers for an entity and registers them in the \
                  target project's wire-up files.",
    after_help = "EXAMPLES:\n\
        \x20 layergen generate --dir ./app --pkg github.com/acme/app --name User --comment 'user management'\n\
        \x20 layergen generate --dir ./app --pkg github.com/acme/app --file order.yaml\n\
        \x20 layergen generate --dir ./app --pkg github.com/acme/app --name Role --modules schema,model\n\
        \x20 layergen completions bash > /usr/share/bash-completion/completions/layergen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate module layers for an entity.
    #[command(
        visible_alias = "g",
        about = "Generate module layers for an entity",
        after_help = "EXAMPLES:\n\
            \x20 layergen generate --dir ./app --pkg github.com/acme/app --name User\n\
            \x20 layergen generate --dir ./app --pkg github.com/acme/app --file order.yaml --storage mongo\n\
            \x20 layergen generate --dir ./app --pkg github.com/acme/app --name Role --modules schema,model,bll"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 layergen completions bash > ~/.local/share/bash-completion/completions/layergen\n\
            \x20 layergen completions zsh  > ~/.zfunc/_layergen\n\
            \x20 layergen completions fish > ~/.config/fish/completions/layergen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `layergen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Root directory of the target project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project root directory"
    )]
    pub dir: PathBuf,

    /// Go module path of the target project.
    #[arg(
        short = 'p',
        long = "pkg",
        value_name = "PKG",
        help = "Module path, e.g. github.com/acme/app"
    )]
    pub pkg: String,

    /// Entity name (exported identifier, e.g. `User`).
    ///
    /// May be omitted when `--file` supplies a top-level `name`.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        required_unless_present = "file",
        help = "Entity name (e.g. User)"
    )]
    pub name: Option<String>,

    /// Entity comment, used in generated doc comments.
    #[arg(
        long = "comment",
        value_name = "COMMENT",
        default_value = "",
        help = "Entity comment"
    )]
    pub comment: String,

    /// Field-definition file (YAML).
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Field-definition file (YAML)"
    )]
    pub file: Option<PathBuf>,

    /// Storage backend for the model layer.
    #[arg(
        short = 's',
        long = "storage",
        value_enum,
        help = "Storage backend (default from config: gorm)"
    )]
    pub storage: Option<StorageArg>,

    /// Layers to generate: `all` or a comma list.
    #[arg(
        short = 'm',
        long = "modules",
        value_name = "MODULES",
        help = "Layers to generate: all or schema,model,bll,api,mock,router"
    )]
    pub modules: Option<String>,

    /// Replace existing generated files (destructive).
    #[arg(long = "override", help = "Overwrite existing generated files")]
    pub overwrite: bool,
}

/// Storage backends exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StorageArg {
    Gorm,
    #[value(alias = "mongodb")]
    Mongo,
}

impl std::fmt::Display for StorageArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gorm => write!(f, "gorm"),
            Self::Mongo => write!(f, "mongo"),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `layergen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
