//! Configuration resolution
//!
//! `resolve` merges a raw config over the framework defaults in a single
//! pass. It is pure: same input, same output, no I/O, no error path. The
//! result is fully concrete - no `extend` placeholder survives - and is
//! treated as immutable for the rest of the process lifetime.

use serde::Serialize;

use crate::config::RawConfig;
use crate::plugins::PluginRef;
use crate::safelist::{self, SafelistEntry};
use crate::theme::{self, Theme};

/// Fully-resolved configuration handed to the generation tool
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedConfig {
    /// Scanner globs, verbatim from the raw config
    pub content: Vec<String>,

    /// Deduplicated safelist union
    pub safelist: Vec<SafelistEntry>,

    /// Defaults with overrides and extensions applied
    pub theme: Theme,

    /// Plugins in invocation order, untouched
    pub plugins: Vec<PluginRef>,
}

/// Resolve a raw config against the framework defaults.
///
/// Theme handling: top-level categories replace the default category
/// wholesale, then `extend` entries merge additively over the result, so an
/// extend wins over an override of the same token. Content globs and plugins
/// pass through verbatim; the safelist is unioned over the empty default.
pub fn resolve(raw: &RawConfig, defaults: &Theme) -> ResolvedConfig {
    if raw.content.is_empty() {
        tracing::warn!("'content' is empty: the scanner will find zero class usages");
    }

    let mut theme = defaults.clone();
    theme::apply_overrides(&mut theme, &raw.theme.overrides);
    theme::merge_extend(&mut theme, &raw.theme.extend);

    ResolvedConfig {
        content: raw.content.clone(),
        safelist: safelist::union(&raw.safelist),
        theme,
        plugins: raw.plugins.clone(),
    }
}
