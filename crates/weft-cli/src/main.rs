//! Weft CLI
//!
//! Developer tool for inspecting and resolving styling configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::resolve::OutputFormat;

/// Weft - utility-CSS configuration resolver
#[derive(Parser)]
#[command(name = "weft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "weft.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Weft project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Project name (defaults to directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Validate configuration without resolving to a file
    Validate {
        /// Reject unknown top-level keys and an empty content list
        #[arg(long)]
        strict: bool,
    },

    /// Resolve configuration against the built-in defaults and print it
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect resolved theme categories
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// List resolved theme categories
    List,

    /// Show tokens of a resolved category
    Show {
        /// Category name (e.g. colors, spacing)
        category: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { path, name } => {
            commands::init::run(&path, name.as_deref())?;
        }
        Commands::Validate { strict } => {
            commands::validate::run(&cli.config, strict)?;
        }
        Commands::Resolve { format, output } => {
            commands::resolve::run(&cli.config, format, output.as_deref())?;
        }
        Commands::Theme { command } => match command {
            ThemeCommands::List => {
                commands::theme::list(&cli.config)?;
            }
            ThemeCommands::Show { category } => {
                commands::theme::show(&cli.config, &category)?;
            }
        },
    }

    Ok(())
}
