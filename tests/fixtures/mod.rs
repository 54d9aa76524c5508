//! Shared fixtures for end-to-end module tests
//!
//! - A sample project build file (fixtures/project/build.toml)
//! - A warning corpus for the not-found export filter
//! - Helpers wiring the TypeScript module into the in-process orchestrator

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tsb_bundler::{BuildModule, ModuleError, SharedBuildSettings, VariantConfig, VariantFlags};
use tsb_host::{fork_ts_checker, Orchestrator};
use typescript_build::TypeScriptModule;

/// Path to the sample project directory
pub fn project_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project")
}

/// Path to the sample project's build file
pub fn build_file_path() -> PathBuf {
    project_dir().join("build.toml")
}

/// Path to the warning corpus
pub fn warning_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/warnings.json")
}

/// One warning case from warnings.json
#[derive(Debug, Clone, serde::Deserialize)]
pub struct WarningCase {
    pub id: String,
    pub name: String,
    pub message: String,
    pub suppressed: bool,
}

/// Full warning corpus
#[derive(Debug, Clone, serde::Deserialize)]
pub struct WarningCorpus {
    pub schema_version: u32,
    pub description: String,
    pub cases: Vec<WarningCase>,
}

impl WarningCorpus {
    /// Load corpus from the fixture file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(warning_corpus_path())?;
        let corpus: WarningCorpus = serde_json::from_str(&content)?;
        Ok(corpus)
    }
}

/// TypeScript module using the stock checker factory
pub fn typescript_module(options: Option<Value>) -> TypeScriptModule {
    TypeScriptModule::new(options, Arc::new(fork_ts_checker))
}

/// Orchestrator with only the TypeScript module registered
pub fn host_with(settings: SharedBuildSettings, options: Option<Value>) -> Orchestrator {
    let mut host = Orchestrator::new(settings);
    host.add_module(Box::new(typescript_module(options)));
    host
}

/// Orchestrator for a plain project rooted at /srv/app
pub fn default_host(options: Option<Value>) -> Orchestrator {
    host_with(SharedBuildSettings::new("/srv/app"), options)
}

/// Module that strips every rule matching a file name, simulating a host
/// whose default rule set lost the script rule
pub struct RuleRemover {
    pub file_name: &'static str,
}

impl BuildModule for RuleRemover {
    fn name(&self) -> &str {
        "rule-remover"
    }

    fn setup(&mut self, _settings: &mut SharedBuildSettings) -> Result<(), ModuleError> {
        Ok(())
    }

    fn extend_build(
        &self,
        config: &mut VariantConfig,
        _flags: VariantFlags,
    ) -> Result<(), ModuleError> {
        config.module.rules.retain(|rule| !rule.matches(self.file_name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_corpus_loads() {
        let corpus = WarningCorpus::load().expect("Failed to load corpus");
        assert_eq!(corpus.schema_version, 1);
        assert!(corpus.cases.iter().any(|c| c.suppressed));
        assert!(corpus.cases.iter().any(|c| !c.suppressed));
    }

    #[test]
    fn test_build_file_exists() {
        assert!(build_file_path().exists());
    }
}
