//! Weft Core Library
//!
//! This crate provides the core functionality for Weft:
//! - Configuration parsing and loading
//! - Theme resolution over framework defaults
//! - Safelist entries and matchers
//! - Plugin references and the generator contract
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  RawConfig  │────▶│  Resolver   │────▶│  Generator  │
//! │ (YAML/JSON) │     │ (+defaults) │     │  (external) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use weft_core::{RawConfig, resolve, theme};
//!
//! let raw = RawConfig::load("./my-project")?;
//! let resolved = resolve(&raw, theme::defaults());
//! println!("{} theme categories", resolved.theme.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod generator;
pub mod plugins;
pub mod resolver;
pub mod safelist;
pub mod theme;

pub use config::{RawConfig, ThemeConfig};
pub use error::{Error, Result};
pub use resolver::{ResolvedConfig, resolve};
pub use safelist::SafelistEntry;
