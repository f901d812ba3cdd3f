//! Configuration parsing and loading
//!
//! This module handles loading raw Weft configuration files.
//!
//! # Configuration Files
//!
//! - `weft.yaml` - project styling configuration (YAML)
//! - `weft.json` - same shape, JSON
//!
//! A raw config only declares what the project overrides; everything else
//! falls back to the framework defaults at resolution time (see
//! [`crate::resolver`]).

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::plugins::PluginRef;
use crate::safelist::SafelistEntry;
use crate::theme::Theme;

/// Top-level keys a config file may declare. Strict mode rejects anything
/// else; permissive mode ignores it, matching the upstream framework.
pub const KNOWN_KEYS: [&str; 4] = ["content", "safelist", "theme", "plugins"];

/// Raw project configuration as written by the user
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfig {
    /// Path globs the external scanner walks for class usages
    #[serde(default)]
    pub content: Vec<String>,

    /// Classes retained regardless of scan results
    #[serde(default)]
    pub safelist: Vec<SafelistEntry>,

    /// Theme overrides and extensions
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Plugins to activate, in invocation order
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

/// The `theme` section of a raw config
///
/// `extend` merges additively over the defaults; any other key is a
/// category override that replaces the default category wholesale.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    /// Additive extensions per category
    #[serde(default)]
    pub extend: Theme,

    /// Wholesale category overrides
    #[serde(flatten)]
    pub overrides: Theme,
}

impl RawConfig {
    /// Load configuration from a directory or file, permissive mode.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory (looks for `weft.yaml`) or
    ///   to a config file; `.json` parses as JSON, anything else as YAML.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let raw = RawConfig::load("./my-project")?;
    /// println!("{} content globs", raw.content.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_mode(path.as_ref(), false)
    }

    /// Load configuration, rejecting unknown top-level keys and an empty
    /// `content` list.
    pub fn load_strict<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_mode(path.as_ref(), true)
    }

    fn load_mode(path: &Path, strict: bool) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("weft.yaml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        tracing::debug!("Loading configuration from {}", config_path.display());
        let contents = std::fs::read_to_string(&config_path)?;

        let is_json = config_path
            .extension()
            .is_some_and(|ext| ext == "json");

        let raw: RawConfig = if is_json {
            let doc: serde_json::Value = serde_json::from_str(&contents)?;
            if strict {
                let keys: Vec<String> = doc
                    .as_object()
                    .map(|map| map.keys().cloned().collect())
                    .unwrap_or_default();
                check_unknown_keys(&keys)?;
            }
            serde_json::from_value(doc)?
        } else {
            let doc: serde_yaml::Value = serde_yaml::from_str(&contents)?;
            if strict {
                let keys: Vec<String> = doc
                    .as_mapping()
                    .map(|map| {
                        map.keys()
                            .filter_map(|k| k.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                check_unknown_keys(&keys)?;
            }
            serde_yaml::from_value(doc)?
        };

        if strict && raw.content.is_empty() {
            return Err(Error::Validation {
                message: "'content' is empty: the scanner would purge every class not on the safelist".to_string(),
            });
        }

        Ok(raw)
    }
}

fn check_unknown_keys(keys: &[String]) -> Result<()> {
    for key in keys {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(Error::Validation {
                message: format!("unknown top-level key '{}'", key),
            });
        }
    }
    Ok(())
}
