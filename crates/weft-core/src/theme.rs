//! Theme tables and merge semantics
//!
//! A theme is a mapping of category name (`colors`, `fontFamily`, `spacing`,
//! ...) to a table of design tokens. Token values are kept opaque so nested
//! shade maps and font-stack arrays pass through untouched.
//!
//! Two merge operations exist:
//!
//! - `extend` - additive: declared tokens override or append, everything else
//!   inherits the default value unchanged
//! - top-level override - wholesale: the declared category replaces the
//!   default category entirely

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Token name -> value table for a single theme category
pub type TokenMap = BTreeMap<String, serde_yaml::Value>;

/// Category name -> token table
pub type Theme = BTreeMap<String, TokenMap>;

/// Merge `extend` entries into `base` additively.
///
/// Same-named tokens from `extend` win; tokens only present in `base` are
/// kept. Categories unknown to `base` are appended as-is.
pub fn merge_extend(base: &mut Theme, extend: &Theme) {
    for (category, tokens) in extend {
        let entry = base.entry(category.clone()).or_default();
        for (name, value) in tokens {
            entry.insert(name.clone(), value.clone());
        }
    }
}

/// Replace categories in `base` wholesale with the ones declared in
/// `overrides`. Tokens of a replaced category that are not re-declared are
/// gone from the result.
pub fn apply_overrides(base: &mut Theme, overrides: &Theme) {
    for (category, tokens) in overrides {
        base.insert(category.clone(), tokens.clone());
    }
}

/// The framework's built-in default theme.
///
/// Built once, never mutated. Callers receive it by reference and merge user
/// config over it at resolution time.
pub fn defaults() -> &'static Theme {
    &DEFAULT_THEME
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    serde_yaml::from_str(DEFAULT_THEME_YAML).expect("built-in default theme must parse")
});

/// Default design tokens, following the upstream framework's palette at
/// reduced scale.
const DEFAULT_THEME_YAML: &str = r##"
colors:
  inherit: inherit
  current: currentColor
  transparent: transparent
  black: "#000000"
  white: "#ffffff"
  gray:
    "50": "#f9fafb"
    "100": "#f3f4f6"
    "200": "#e5e7eb"
    "300": "#d1d5db"
    "400": "#9ca3af"
    "500": "#6b7280"
    "600": "#4b5563"
    "700": "#374151"
    "800": "#1f2937"
    "900": "#111827"
  red:
    "100": "#fee2e2"
    "500": "#ef4444"
    "700": "#b91c1c"
  green:
    "100": "#dcfce7"
    "500": "#22c55e"
    "700": "#15803d"
  blue:
    "100": "#dbeafe"
    "500": "#3b82f6"
    "700": "#1d4ed8"
  indigo:
    "100": "#e0e7ff"
    "500": "#6366f1"
    "700": "#4338ca"

fontFamily:
  sans:
    - ui-sans-serif
    - system-ui
    - sans-serif
  serif:
    - ui-serif
    - Georgia
    - serif
  mono:
    - ui-monospace
    - SFMono-Regular
    - Menlo
    - monospace

spacing:
  "0": 0px
  px: 1px
  "0.5": 0.125rem
  "1": 0.25rem
  "2": 0.5rem
  "3": 0.75rem
  "4": 1rem
  "5": 1.25rem
  "6": 1.5rem
  "8": 2rem
  "10": 2.5rem
  "12": 3rem
  "16": 4rem
  "24": 6rem
  "32": 8rem

borderRadius:
  none: 0px
  sm: 0.125rem
  DEFAULT: 0.25rem
  md: 0.375rem
  lg: 0.5rem
  full: 9999px
"##;
