//! Configuration file support for apkviz.
//!
//! Provides YAML-based configuration through `apkviz.config.yml` files:
//! which mirror, release branch, architecture, and repositories the
//! merged index is assembled from.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "apkviz.config.yml";

/// Default mirror base URL.
const DEFAULT_MIRROR: &str = "https://dl-cdn.alpinelinux.org/alpine";
/// Default release branch.
const DEFAULT_BRANCH: &str = "v3.18";
/// Default package architecture.
const DEFAULT_ARCH: &str = "x86_64";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mirror: Option<String>,
    pub branch: Option<String>,
    pub arch: Option<String>,
    pub repositories: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml::Value>,
}

/// Resolved index-source configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub mirror: String,
    pub branch: String,
    pub arch: String,
    /// Repositories in fetch order; a later repository wins name
    /// conflicts during the merge.
    pub repositories: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            mirror: DEFAULT_MIRROR.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            repositories: vec!["main".to_string(), "community".to_string()],
        }
    }
}

impl MirrorConfig {
    /// Index source URLs in fetch (merge) order.
    pub fn source_urls(&self) -> Vec<String> {
        self.repositories
            .iter()
            .map(|repo| {
                format!(
                    "{}/{}/{}/{}/APKINDEX.tar.gz",
                    self.mirror.trim_end_matches('/'),
                    self.branch,
                    repo,
                    self.arch
                )
            })
            .collect()
    }

    fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            mirror: file.mirror.unwrap_or(defaults.mirror),
            branch: file.branch.unwrap_or(defaults.branch),
            arch: file.arch.unwrap_or(defaults.arch),
            repositories: file.repositories.unwrap_or(defaults.repositories),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<MirrorConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(MirrorConfig::from_file(config))
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<MirrorConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref repositories) = config.repositories {
        if repositories.is_empty() {
            bail!(
                "Invalid config: repositories must not be empty.\n\n\
                 💡 Hint: List at least one repository (e.g., \"main\"), or remove the field to use the defaults."
            );
        }
        for (i, repo) in repositories.iter().enumerate() {
            if repo.trim().is_empty() {
                bail!("Invalid config: repositories[{}] must not be empty.", i);
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
