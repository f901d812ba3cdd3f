//! Validate configuration command

use anyhow::{Context, Result};
use weft_core::{RawConfig, resolve, theme};

/// Run the validate command
pub fn run(config_path: &str, strict: bool) -> Result<()> {
    tracing::info!("Validating configuration: {}", config_path);

    let raw = if strict {
        RawConfig::load_strict(config_path)
    } else {
        RawConfig::load(config_path)
    }
    .context("Failed to load configuration")?;

    // Safelist patterns must compile even though the resolver passes them
    // through untouched.
    for entry in &raw.safelist {
        entry.matcher().context("Invalid safelist entry")?;
    }

    // resolve warns on an empty content list
    let resolved = resolve(&raw, theme::defaults());

    tracing::info!("✓ Content globs: {}", resolved.content.len());
    tracing::info!("✓ Safelist entries: {}", resolved.safelist.len());
    tracing::info!("✓ Theme categories: {}", resolved.theme.len());
    tracing::info!("✓ Plugins: {}", resolved.plugins.len());

    tracing::info!("✓ Configuration is valid");
    Ok(())
}
