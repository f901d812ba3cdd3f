//! Plugin references and the built-in registry
//!
//! The resolver treats plugin entries as opaque values and passes them
//! through in declared order; order matters to the generator because later
//! plugins win on CSS specificity. Names are only resolved against the
//! registry when the generator registers them, so a config that names an
//! unknown plugin still parses and resolves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::generator::Generator;

/// A plugin entry as written in the config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PluginRef {
    /// Bare plugin name
    Name(String),

    /// Plugin name with options
    Detailed {
        /// Registry name
        name: String,
        /// Options forwarded to the plugin untouched
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        options: BTreeMap<String, serde_yaml::Value>,
    },
}

impl PluginRef {
    /// The registry name this entry refers to
    pub fn name(&self) -> &str {
        match self {
            PluginRef::Name(name) => name,
            PluginRef::Detailed { name, .. } => name,
        }
    }
}

/// A capability the generator invokes during CSS generation.
///
/// Implementations are responsible for declaring themselves to the
/// generator; what they emit is outside this crate.
pub trait Plugin {
    /// Registry name
    fn name(&self) -> &'static str;

    /// Declare this plugin to the generator
    fn register_into(&self, generator: &mut dyn Generator);
}

/// Form-element reset styles
struct FormsPlugin;

impl Plugin for FormsPlugin {
    fn name(&self) -> &'static str {
        "forms"
    }

    fn register_into(&self, generator: &mut dyn Generator) {
        generator.register(self.name());
    }
}

/// Prose typography defaults
struct TypographyPlugin;

impl Plugin for TypographyPlugin {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn register_into(&self, generator: &mut dyn Generator) {
        generator.register(self.name());
    }
}

/// Resolve a well-known plugin name to its built-in capability.
///
/// Unknown names fail here, at registration time, never at config parse.
pub fn builtin(name: &str) -> Result<Box<dyn Plugin>> {
    match name {
        "forms" => Ok(Box::new(FormsPlugin)),
        "typography" => Ok(Box::new(TypographyPlugin)),
        _ => Err(Error::UnknownPlugin {
            name: name.to_string(),
        }),
    }
}
