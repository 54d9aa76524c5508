//! Bundler configuration contract.
//!
//! Types shared between build modules and the orchestrator that drives
//! them: shared settings, per-variant configuration, module rules and
//! loader chains, plugins, and the module hook trait.

pub mod convert;
pub mod module;
pub mod plugin;
pub mod rule;
pub mod settings;
pub mod variant;

pub use convert::toml_to_json;
pub use module::{BuildModule, ModuleError};
pub use plugin::{BundlerPlugin, ScopedLogger, TypeCheckerFactory, TypeCheckerOptions};
pub use rule::{LoaderDescriptor, ModuleRule, RuleMatcher};
pub use settings::{
    BabelSettings, BuildSettings, BuildWarning, CliSettings, SharedBuildSettings, WarningFilter,
};
pub use variant::{ModuleConfig, ResolveConfig, VariantConfig, VariantFlags};
