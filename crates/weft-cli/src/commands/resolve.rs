//! Resolve configuration command

use anyhow::{Context, Result};
use clap::ValueEnum;
use weft_core::{RawConfig, resolve, theme};

/// Serialization format for resolved output
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Run the resolve command
pub fn run(config_path: &str, format: OutputFormat, output: Option<&str>) -> Result<()> {
    let raw = RawConfig::load(config_path).context("Failed to load configuration")?;
    let resolved = resolve(&raw, theme::defaults());

    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&resolved)?,
        OutputFormat::Json => serde_json::to_string_pretty(&resolved)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!("✓ Wrote resolved configuration to {}", path);
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}
