//! Seam to the external CSS generator
//!
//! Weft resolves configuration; an external tool scans content, generates
//! utilities, and purges unused classes. [`Generator`] is the contract that
//! tool implements, and [`feed`] walks a resolved config into it:
//! every safelist entry is retained unconditionally, and plugins are
//! registered in declared order.

use crate::error::Result;
use crate::plugins;
use crate::resolver::ResolvedConfig;
use crate::safelist::SafelistEntry;

/// Sink for resolved configuration, implemented by the generation tool
pub trait Generator {
    /// Force an entry to be kept in output regardless of scan results
    fn retain(&mut self, entry: &SafelistEntry);

    /// Activate a plugin; calls arrive in config-declared order
    fn register(&mut self, plugin: &str);
}

/// Push a resolved config through a generator.
///
/// Fails with [`crate::Error::UnknownPlugin`] when a plugin name is not in
/// the built-in registry; safelist entries retained before the failure stay
/// retained, since a real generator run aborts anyway.
pub fn feed(config: &ResolvedConfig, generator: &mut dyn Generator) -> Result<()> {
    for entry in &config.safelist {
        generator.retain(entry);
    }
    for plugin_ref in &config.plugins {
        let plugin = plugins::builtin(plugin_ref.name())?;
        plugin.register_into(generator);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfig;
    use crate::plugins::PluginRef;
    use crate::resolver::resolve;
    use crate::theme;

    /// Pass-through generator that records everything it is handed
    #[derive(Default)]
    struct RecordingGenerator {
        retained: Vec<SafelistEntry>,
        registered: Vec<String>,
    }

    impl Generator for RecordingGenerator {
        fn retain(&mut self, entry: &SafelistEntry) {
            self.retained.push(entry.clone());
        }

        fn register(&mut self, plugin: &str) {
            self.registered.push(plugin.to_string());
        }
    }

    #[test]
    fn test_empty_content_still_retains_safelist() {
        let yaml = r#"
content: []
safelist:
  - keep-me
  - pattern: "^badge-"
"#;
        let raw: RawConfig = serde_yaml::from_str(yaml).unwrap();
        let resolved = resolve(&raw, theme::defaults());

        let mut generator = RecordingGenerator::default();
        feed(&resolved, &mut generator).unwrap();

        assert_eq!(generator.retained.len(), 2);
        assert_eq!(
            generator.retained[0],
            SafelistEntry::Literal("keep-me".into())
        );
    }

    #[test]
    fn test_plugins_register_in_declared_order() {
        let raw = RawConfig {
            plugins: vec![
                PluginRef::Name("typography".into()),
                PluginRef::Name("forms".into()),
            ],
            ..Default::default()
        };
        let resolved = resolve(&raw, theme::defaults());

        let mut generator = RecordingGenerator::default();
        feed(&resolved, &mut generator).unwrap();

        assert_eq!(generator.registered, vec!["typography", "forms"]);
    }

    #[test]
    fn test_unknown_plugin_aborts_feed() {
        let raw = RawConfig {
            plugins: vec![PluginRef::Name("container-queries".into())],
            ..Default::default()
        };
        let resolved = resolve(&raw, theme::defaults());

        let mut generator = RecordingGenerator::default();
        assert!(feed(&resolved, &mut generator).is_err());
        assert!(generator.registered.is_empty());
    }
}
