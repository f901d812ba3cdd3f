//! Integration tests for the complete configuration pipeline
//!
//! Tests use temporary directories with real file fixtures to verify:
//! - Config loading from YAML and JSON files
//! - Resolution against the built-in defaults
//! - Safelist matcher compilation
//! - Strict-mode rejection
//! - The generator pass-through contract

use tempfile::TempDir;
use weft_core::generator::{Generator, feed};
use weft_core::safelist::SafelistEntry;
use weft_core::{RawConfig, resolve, theme};

/// Helper to create a temporary project directory holding `weft.yaml`.
fn setup_project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("weft.yaml"), config).unwrap();
    dir
}

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

// =============================================================================
// Load + resolve
// =============================================================================

#[test]
fn test_load_and_resolve_full_project() {
    let dir = setup_project(
        r##"
content:
  - "./backend/templates/**/*.html"
  - "./backend/**/*.js"
safelist:
  - pattern: ".*"
theme:
  extend:
    colors:
      brand: "#5B21B6"
plugins:
  - forms
  - typography
"##,
    );

    let raw = RawConfig::load(dir.path()).unwrap();
    let resolved = resolve(&raw, theme::defaults());

    assert_eq!(resolved.content.len(), 2);
    assert_eq!(
        resolved.theme["colors"]["brand"],
        serde_yaml::Value::String("#5B21B6".into())
    );
    // untouched default tokens survive the extend
    assert_eq!(
        resolved.theme["colors"]["black"],
        serde_yaml::Value::String("#000000".into())
    );
    assert_eq!(resolved.plugins.len(), 2);

    // the dev-mode catch-all safelist pattern compiles and matches anything
    let matcher = resolved.safelist[0].matcher().unwrap();
    assert!(matcher.is_match("bg-red-500"));
    assert!(matcher.is_match("whatever"));
}

#[test]
fn test_resolve_twice_yields_identical_output() {
    let dir = setup_project(
        r##"
content:
  - "./src/**/*.html"
theme:
  colors:
    primary: "#fff"
  extend:
    spacing:
      "128": 32rem
"##,
    );

    let raw = RawConfig::load(dir.path()).unwrap();
    let first = resolve(&raw, theme::defaults());
    let second = resolve(&raw, theme::defaults());

    assert_eq!(first, second);
    // serialized form is stable too
    assert_eq!(
        serde_yaml::to_string(&first).unwrap(),
        serde_yaml::to_string(&second).unwrap()
    );
}

#[test]
fn test_json_config_resolves_like_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weft.json");
    std::fs::write(
        &path,
        r##"{
  "content": ["./src/**/*.html"],
  "theme": {"extend": {"colors": {"primary": "#5B21B6"}}},
  "plugins": ["forms"]
}"##,
    )
    .unwrap();

    let raw = RawConfig::load(&path).unwrap();
    let resolved = resolve(&raw, theme::defaults());
    assert_eq!(
        resolved.theme["colors"]["primary"],
        serde_yaml::Value::String("#5B21B6".into())
    );
}

// =============================================================================
// Strict mode
// =============================================================================

#[test]
fn test_strict_mode_rejects_unknown_top_level_key() {
    let dir = setup_project("content: [\"./src/*.html\"]\ncorePlugins: []\n");
    assert!(RawConfig::load(dir.path()).is_ok());
    assert!(RawConfig::load_strict(dir.path()).is_err());
}

// =============================================================================
// Generator contract
// =============================================================================

#[test]
fn test_generator_receives_safelist_despite_empty_content() {
    let dir = setup_project(
        r#"
content: []
safelist:
  - keep-me
"#,
    );

    let raw = RawConfig::load(dir.path()).unwrap();
    let resolved = resolve(&raw, theme::defaults());

    let mut generator = RecordingGenerator::default();
    feed(&resolved, &mut generator).unwrap();
    assert_eq!(
        generator.retained,
        vec![SafelistEntry::Literal("keep-me".into())]
    );
}

#[test]
fn test_generator_plugin_order_matches_config() {
    let dir = setup_project(
        r#"
content: ["./src/*.html"]
plugins:
  - typography
  - forms
"#,
    );

    let raw = RawConfig::load(dir.path()).unwrap();
    let resolved = resolve(&raw, theme::defaults());

    let mut generator = RecordingGenerator::default();
    feed(&resolved, &mut generator).unwrap();
    assert_eq!(generator.registered, vec!["typography", "forms"]);
}
