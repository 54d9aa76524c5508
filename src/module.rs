//! The TypeScript build module
//!
//! Implements the orchestrator's module hooks: option resolution and
//! shared-settings extension once at setup, then rule injection and the
//! type-checker gate for every variant.

use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tsb_bundler::{
    BuildModule, ModuleError, SharedBuildSettings, TypeCheckerFactory, VariantConfig, VariantFlags,
};

use crate::config::{BuiltinDefaults, EffectiveConfig, PROCESS_CONFIG_KEY};
use crate::environment;
use crate::error::{BuildError, BuildResult};
use crate::rules;
use crate::type_check;

/// Module name reported to the orchestrator
pub const MODULE_NAME: &str = "typescript-build";

/// State captured at setup and read by every variant hook
#[derive(Debug, Clone)]
struct ModuleState {
    options: EffectiveConfig,
    root_dir: PathBuf,
}

/// TypeScript support for the build.
pub struct TypeScriptModule {
    module_options: Option<Value>,
    process_config_path: Option<PathBuf>,
    checker_factory: Arc<dyn TypeCheckerFactory>,
    state: Option<ModuleState>,
}

impl TypeScriptModule {
    /// Create the module with call-site options and the checker factory.
    pub fn new(
        module_options: Option<Value>,
        checker_factory: Arc<dyn TypeCheckerFactory>,
    ) -> Self {
        Self {
            module_options,
            process_config_path: None,
            checker_factory,
            state: None,
        }
    }

    /// Read the process-wide layer from a TOML build file instead of the
    /// shared settings.
    pub fn with_process_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.process_config_path = Some(path.into());
        self
    }

    /// Resolved options, available after setup.
    pub fn options(&self) -> Option<&EffectiveConfig> {
        self.state.as_ref().map(|state| &state.options)
    }

    /// Resolve options and extend the shared settings.
    pub fn configure(&mut self, settings: &mut SharedBuildSettings) -> BuildResult<()> {
        let options = match &self.process_config_path {
            Some(path) => {
                EffectiveConfig::build(Some(path.as_path()), self.module_options.clone())?
            }
            None => EffectiveConfig::resolve(
                &BuiltinDefaults::default(),
                settings.module_options(PROCESS_CONFIG_KEY).cloned(),
                self.module_options.clone(),
            ),
        };

        let root_dir = type_check::resolve_root(&settings.root_dir).map_err(BuildError::RootDir)?;
        environment::extend(settings, &options)?;
        debug!(options = %options.config, "typescript module set up");

        self.state = Some(ModuleState { options, root_dir });
        Ok(())
    }

    /// Inject rules and gate the type checker for one variant.
    ///
    /// Returns whether the type checker was attached.
    pub fn extend_variant(
        &self,
        config: &mut VariantConfig,
        flags: VariantFlags,
    ) -> BuildResult<bool> {
        let state = self.state.as_ref().ok_or(BuildError::NotSetUp)?;

        rules::inject_rules(config, flags, &state.options)?;
        Ok(type_check::attach_type_checker(
            config,
            flags,
            &state.options,
            &state.root_dir,
            self.checker_factory.as_ref(),
        ))
    }
}

impl BuildModule for TypeScriptModule {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn setup(&mut self, settings: &mut SharedBuildSettings) -> Result<(), ModuleError> {
        self.configure(settings)?;
        Ok(())
    }

    fn extend_build(
        &self,
        config: &mut VariantConfig,
        flags: VariantFlags,
    ) -> Result<(), ModuleError> {
        self.extend_variant(config, flags)?;
        Ok(())
    }
}
