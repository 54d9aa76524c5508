//! Orchestrator-owned build settings shared by every module.
//!
//! Settings are written by modules during setup, before any variant
//! configuration exists, and are read-only afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A warning emitted by the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWarning {
    /// Diagnostic category (e.g. "ModuleDependencyWarning").
    pub name: String,

    /// Human-readable message.
    pub message: String,
}

impl BuildWarning {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Predicate that suppresses matching warnings.
#[derive(Clone)]
pub struct WarningFilter {
    label: String,
    predicate: Arc<dyn Fn(&BuildWarning) -> bool + Send + Sync>,
}

impl WarningFilter {
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&BuildWarning) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Whether the warning should be suppressed.
    pub fn matches(&self, warning: &BuildWarning) -> bool {
        (self.predicate)(warning)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for WarningFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarningFilter")
            .field("label", &self.label)
            .finish()
    }
}

/// CLI presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    /// Banner colour of the build output
    pub banner_color: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            banner_color: "green".to_string(),
        }
    }
}

/// Transpiler settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BabelSettings {
    /// Transpiler plugins; None until a module initialises the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

/// Build settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Extra extensions watched by the file watcher and router
    #[serde(default)]
    pub additional_extensions: Vec<String>,

    /// Transpiler settings
    #[serde(default)]
    pub babel: BabelSettings,

    /// Warning suppression predicates, in installation order
    #[serde(skip)]
    pub warning_ignore_filters: Vec<WarningFilter>,
}

/// Settings shared across all modules and build variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedBuildSettings {
    /// Project root directory
    pub root_dir: PathBuf,

    /// Recognised source extensions (without leading dot)
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub cli: CliSettings,

    #[serde(default)]
    pub build: BuildSettings,

    /// Per-module option tables keyed by module config key
    /// (e.g. "typescript")
    #[serde(default)]
    pub module_options: Map<String, Value>,
}

impl SharedBuildSettings {
    /// Create settings for a project root with the usual script extensions.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            extensions: vec!["js".to_string(), "mjs".to_string()],
            cli: CliSettings::default(),
            build: BuildSettings::default(),
            module_options: Map::new(),
        }
    }

    /// Option table of a module, if the project configures one.
    pub fn module_options(&self, key: &str) -> Option<&Value> {
        self.module_options.get(key)
    }

    /// Set the option table of a module.
    pub fn set_module_options(&mut self, key: impl Into<String>, options: Value) {
        self.module_options.insert(key.into(), options);
    }

    /// Whether any installed filter suppresses the warning.
    pub fn is_warning_ignored(&self, warning: &BuildWarning) -> bool {
        self.build
            .warning_ignore_filters
            .iter()
            .any(|filter| filter.matches(warning))
    }
}
