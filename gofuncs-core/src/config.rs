//! Configuration for gofuncs
//!
//! Parser options are the only setting the core itself consumes. The CLI can
//! also read them from a JSON file so a project can fix them once.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.gofuncsrc.json` in the project directory
//! 3. `gofuncs.config.json` in the project directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAMES: &[&str] = &[".gofuncsrc.json", "gofuncs.config.json"];

/// Options handed to the document parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserOptions {
    /// Track comment groups so declarations get their doc comment attached
    #[serde(default)]
    pub parse_comments: bool,
}

impl ParserOptions {
    pub fn with_comments() -> Self {
        ParserOptions {
            parse_comments: true,
        }
    }
}

/// Configuration as read from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GofuncsConfig {
    /// Attach doc comments to declarations (default: false)
    #[serde(default)]
    pub parse_comments: Option<bool>,

    /// Output format for the CLI (default: text)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Configuration with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub parser_options: ParserOptions,
    pub format: OutputFormat,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl GofuncsConfig {
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            parser_options: ParserOptions {
                parse_comments: self.parse_comments.unwrap_or(false),
            },
            format: self.format.unwrap_or_default(),
            config_path: None,
        }
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Self {
        GofuncsConfig::default().resolve()
    }
}

/// Discover and load a config file from the project directory
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_dir: &Path) -> Result<Option<(GofuncsConfig, PathBuf)>> {
    for name in CONFIG_FILE_NAMES {
        let path = project_dir.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<GofuncsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in the project directory.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        (load_config_file(path)?, Some(path.to_path_buf()))
    } else {
        match discover_config(project_dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (GofuncsConfig::default(), None),
        }
    };

    let mut resolved = config.resolve();
    resolved.config_path = source_path;
    Ok(resolved)
}
