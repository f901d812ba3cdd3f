//! Initialize a new Weft project

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Run the init command
pub fn run(path: &str, name: Option<&str>) -> Result<()> {
    let project_dir = Path::new(path);

    // Create directory if it doesn't exist
    if !project_dir.exists() {
        fs::create_dir_all(project_dir)?;
    }

    // Get absolute path for deriving name
    let abs_path = project_dir.canonicalize()?;

    // Derive project name from directory name if not provided
    let project_name = match name {
        Some(n) => n.to_string(),
        None => abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not determine project name from path"))?,
    };

    // Check if already initialized
    if project_dir.join("weft.yaml").exists() {
        anyhow::bail!(
            "Directory '{}' already contains a weft.yaml",
            project_dir.display()
        );
    }

    tracing::info!("Creating new Weft project: {}", project_name);

    // Create weft.yaml
    let config = format!(
        r#"# Weft styling configuration for {project_name}
# Globs the class scanner walks; keep this list complete or classes get purged.
content:
  - "./templates/**/*.html"
  - "./src/**/*.js"

# Classes kept regardless of scan results. Entries are literal names or
# pattern objects:
#   - pattern: ".*"        # dev only: keep everything
safelist: []

theme:
  # Additive extensions; unspecified tokens inherit the framework defaults.
  extend: {{}}

# Plugins activate in declared order (later wins on specificity).
plugins: []
"#
    );
    fs::write(project_dir.join("weft.yaml"), config)?;

    // Create .gitignore
    let gitignore = r#"# Generated CSS
dist/

# IDE
.idea/
.vscode/
*.swp
"#;
    fs::write(project_dir.join(".gitignore"), gitignore)?;

    tracing::info!(
        "✓ Created project '{}' at {}",
        project_name,
        abs_path.display()
    );
    tracing::info!("");
    tracing::info!("Next steps:");
    if path != "." {
        tracing::info!("  cd {}", project_dir.display());
    }
    tracing::info!("  weft validate    # Check configuration");
    tracing::info!("  weft resolve     # Print the resolved settings");

    Ok(())
}
