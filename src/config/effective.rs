//! Effective configuration with provenance
//!
//! The effective configuration holds the merged option object plus
//! information about which layers contributed to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;
use tsb_bundler::toml_to_json;

use super::defaults::BuiltinDefaults;
use super::merge::merge_layers;

/// Key of the module's table in the project build configuration
pub const PROCESS_CONFIG_KEY: &str = "typescript";

/// Origin of a configuration layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Process,
    Module,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this layer
    pub origin: ConfigOrigin,

    /// File path (None unless loaded from disk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None unless loaded from disk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ConfigSource {
    fn in_memory(origin: ConfigOrigin) -> Self {
        Self {
            origin,
            path: None,
            digest: None,
        }
    }
}

/// Effective module configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    /// The merged option object
    pub config: Value,

    /// Contributing layers in precedence order
    pub sources: Vec<ConfigSource>,
}

/// JavaScript-style truthiness of an option value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Load the `[typescript]` table of a TOML build configuration file.
///
/// Returns the table as JSON (an empty object when the file has no such
/// table) and the hex SHA-256 digest of the raw file bytes.
pub fn load_process_config(path: &Path) -> Result<(Value, String), ConfigError> {
    let bytes = fs::read(path)?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hex::encode(hasher.finalize());

    let contents = String::from_utf8(bytes)
        .map_err(|e| ConfigError::Parse(format!("invalid UTF-8: {}", e)))?;

    let mut document: toml::Table = toml::from_str(&contents)
        .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))?;

    let value = document
        .remove(PROCESS_CONFIG_KEY)
        .map(toml_to_json)
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok((value, digest))
}

impl EffectiveConfig {
    /// Resolve options from in-memory layers.
    ///
    /// Pure merge: no I/O and no validation. Any key missing from the later
    /// layers keeps its default.
    pub fn resolve(
        defaults: &BuiltinDefaults,
        process_config: Option<Value>,
        module_options: Option<Value>,
    ) -> Self {
        let mut layers = vec![defaults.to_value()];
        let mut sources = vec![ConfigSource::in_memory(ConfigOrigin::Builtin)];

        if let Some(process) = process_config {
            layers.push(process);
            sources.push(ConfigSource::in_memory(ConfigOrigin::Process));
        }

        if let Some(module) = module_options {
            layers.push(module);
            sources.push(ConfigSource::in_memory(ConfigOrigin::Module));
        }

        Self {
            config: merge_layers(layers),
            sources,
        }
    }

    /// Resolve options with the process layer read from a build
    /// configuration file.
    ///
    /// A given path must be readable; a missing file is `ConfigError::Io`.
    pub fn build(
        process_config_path: Option<&Path>,
        module_options: Option<Value>,
    ) -> Result<Self, ConfigError> {
        let Some(path) = process_config_path else {
            return Ok(Self::resolve(&BuiltinDefaults::default(), None, module_options));
        };

        let (process, digest) = load_process_config(path)?;
        let mut effective =
            Self::resolve(&BuiltinDefaults::default(), Some(process), module_options);
        if let Some(slot) = effective
            .sources
            .iter_mut()
            .find(|s| s.origin == ConfigOrigin::Process)
        {
            slot.path = Some(path.to_string_lossy().to_string());
            slot.digest = Some(digest);
        }

        Ok(effective)
    }

    /// Get an option value by path (dot-separated)
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.config;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Whether not-found export warnings are suppressed
    pub fn ignore_not_found_warnings(&self) -> bool {
        self.get("ignoreNotFoundWarnings").is_some_and(is_truthy)
    }

    /// Whether the type checker is requested
    pub fn type_check_enabled(&self) -> bool {
        self.get("typeCheck").is_some_and(is_truthy)
    }

    /// Partial type-checker options, when `typeCheck` is an object
    pub fn type_check_overrides(&self) -> Option<&Map<String, Value>> {
        self.get("typeCheck").and_then(Value::as_object)
    }

    /// Partial loader options for one extension
    pub fn loader_overrides(&self, extension: &str) -> Option<&Map<String, Value>> {
        self.config
            .get("loaders")
            .and_then(|loaders| loaders.get(extension))
            .and_then(Value::as_object)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
