//! Inspect resolved theme categories

use anyhow::{Context, Result};
use weft_core::{RawConfig, resolve, theme};

/// List resolved theme categories with their token counts
pub fn list(config_path: &str) -> Result<()> {
    let resolved = load_resolved(config_path)?;

    for (category, tokens) in &resolved.theme {
        println!("{} ({} tokens)", category, tokens.len());
    }
    Ok(())
}

/// Show the tokens of a single resolved category
pub fn show(config_path: &str, category: &str) -> Result<()> {
    let resolved = load_resolved(config_path)?;

    let tokens = resolved
        .theme
        .get(category)
        .with_context(|| format!("No theme category named '{}'", category))?;

    println!("{}", serde_yaml::to_string(tokens)?);
    Ok(())
}

fn load_resolved(config_path: &str) -> Result<weft_core::ResolvedConfig> {
    let raw = RawConfig::load(config_path).context("Failed to load configuration")?;
    Ok(resolve(&raw, theme::defaults()))
}
