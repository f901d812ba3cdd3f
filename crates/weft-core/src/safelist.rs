//! Safelist entries and matchers
//!
//! Safelisted classes are forcibly retained by the generator regardless of
//! what the content scan finds. An entry is either a literal class name or a
//! pattern object, matching the two shapes allowed in the config file:
//!
//! ```yaml
//! safelist:
//!   - bg-red-500
//!   - pattern: "^text-(sm|lg)$"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// A single safelist entry as written in the config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SafelistEntry {
    /// Exact class name
    Literal(String),

    /// Pattern object matching a family of class names
    Pattern {
        /// Regex source, uncompiled
        pattern: String,
    },
}

impl SafelistEntry {
    /// Compile this entry into a matcher.
    ///
    /// Literal entries always succeed; pattern entries fail with
    /// [`Error::InvalidPattern`] when the regex does not compile.
    pub fn matcher(&self) -> Result<SafelistMatcher> {
        match self {
            SafelistEntry::Literal(name) => Ok(SafelistMatcher::Literal(name.clone())),
            SafelistEntry::Pattern { pattern } => {
                let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                Ok(SafelistMatcher::Pattern(regex))
            }
        }
    }
}

/// Compiled form of a safelist entry
#[derive(Debug, Clone)]
pub enum SafelistMatcher {
    /// Exact match against a class name
    Literal(String),

    /// Compiled regex match
    Pattern(Regex),
}

impl SafelistMatcher {
    /// Whether `class` is covered by this entry
    pub fn is_match(&self, class: &str) -> bool {
        match self {
            SafelistMatcher::Literal(name) => name == class,
            SafelistMatcher::Pattern(regex) => regex.is_match(class),
        }
    }
}

/// Union of safelist entries over the (empty) default safelist.
///
/// Duplicates are dropped; first-occurrence order is preserved so resolution
/// stays deterministic.
pub fn union(entries: &[SafelistEntry]) -> Vec<SafelistEntry> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert((*entry).clone()))
        .cloned()
        .collect()
}
