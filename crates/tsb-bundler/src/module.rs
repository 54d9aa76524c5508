//! Build module contract.

use crate::settings::SharedBuildSettings;
use crate::variant::{VariantConfig, VariantFlags};

/// Error returned by a module hook. The orchestrator aborts build setup on
/// the first one.
pub type ModuleError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An extension point of the build orchestrator.
///
/// `setup` runs once, before any variant exists. `extend_build` runs once
/// per variant, serially, after the orchestrator has populated the
/// variant's default rules.
pub trait BuildModule: Send + Sync {
    /// Module name used in diagnostics.
    fn name(&self) -> &str;

    fn setup(&mut self, settings: &mut SharedBuildSettings) -> Result<(), ModuleError>;

    fn extend_build(
        &self,
        config: &mut VariantConfig,
        flags: VariantFlags,
    ) -> Result<(), ModuleError>;
}
