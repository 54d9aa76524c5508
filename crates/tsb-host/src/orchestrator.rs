//! Build orchestration
//!
//! Drives registered modules through the configuration lifecycle:
//! 1. `setup` for every module, in registration order
//! 2. for each variant, serially: default configuration, then
//!    `extend_build` for every module
//!
//! The first module error aborts the whole pass.

use serde::Serialize;
use tracing::{debug, info};
use tsb_bundler::{BuildModule, BuildWarning, SharedBuildSettings, VariantConfig, VariantFlags};

use crate::defaults::variant_config;
use crate::error::{HostError, HostResult};

/// Variants produced by a standard build
pub const STANDARD_VARIANTS: [VariantFlags; 3] = [
    VariantFlags {
        is_client: true,
        is_modern: false,
    },
    VariantFlags {
        is_client: true,
        is_modern: true,
    },
    VariantFlags {
        is_client: false,
        is_modern: false,
    },
];

/// A finished variant configuration
#[derive(Debug, Serialize)]
pub struct BuiltVariant {
    pub flags: VariantFlags,
    pub config: VariantConfig,
}

/// Warnings split by the installed filters
#[derive(Debug, Default, Clone, Serialize)]
pub struct WarningReport {
    pub reported: Vec<BuildWarning>,
    pub suppressed: Vec<BuildWarning>,
}

/// In-process build orchestrator
pub struct Orchestrator {
    settings: SharedBuildSettings,
    modules: Vec<Box<dyn BuildModule>>,
    set_up: bool,
}

impl Orchestrator {
    pub fn new(settings: SharedBuildSettings) -> Self {
        Self {
            settings,
            modules: Vec::new(),
            set_up: false,
        }
    }

    /// Register a module. Modules run in registration order.
    pub fn add_module(&mut self, module: Box<dyn BuildModule>) -> &mut Self {
        self.modules.push(module);
        self
    }

    pub fn settings(&self) -> &SharedBuildSettings {
        &self.settings
    }

    /// Run every module's setup hook once.
    pub fn setup(&mut self) -> HostResult<()> {
        if self.set_up {
            return Ok(());
        }

        for module in self.modules.iter_mut() {
            debug!(module = module.name(), "module setup");
            module
                .setup(&mut self.settings)
                .map_err(|source| HostError::Module {
                    module: module.name().to_string(),
                    phase: "setup".to_string(),
                    source,
                })?;
        }

        self.set_up = true;
        Ok(())
    }

    /// Build one variant: defaults, then every module's extension hook.
    pub fn build_variant(&mut self, flags: VariantFlags) -> HostResult<BuiltVariant> {
        self.setup()?;

        let mut config = variant_config(flags)?;
        for module in &self.modules {
            module
                .extend_build(&mut config, flags)
                .map_err(|source| HostError::Module {
                    module: module.name().to_string(),
                    phase: flags.label().to_string(),
                    source,
                })?;
        }

        info!(
            variant = %flags,
            rules = config.module.rules.len(),
            plugins = config.plugins.len(),
            "variant configured"
        );
        Ok(BuiltVariant { flags, config })
    }

    /// Build the given variants serially, in order.
    pub fn build_variants(&mut self, variants: &[VariantFlags]) -> HostResult<Vec<BuiltVariant>> {
        variants
            .iter()
            .map(|flags| self.build_variant(*flags))
            .collect()
    }

    /// Build client, modern and server variants.
    pub fn build(&mut self) -> HostResult<Vec<BuiltVariant>> {
        self.build_variants(&STANDARD_VARIANTS)
    }

    /// Split bundler warnings into reported and suppressed.
    pub fn filter_warnings(&self, warnings: Vec<BuildWarning>) -> WarningReport {
        let (suppressed, reported): (Vec<_>, Vec<_>) = warnings
            .into_iter()
            .partition(|warning| self.settings.is_warning_ignored(warning));
        WarningReport {
            reported,
            suppressed,
        }
    }
}
