//! In-process build orchestrator
//!
//! Owns the shared build settings, constructs one bundler configuration per
//! build variant from a default rule set, and runs registered build modules
//! against them. Used to exercise modules end to end without a bundler.

pub mod checker;
pub mod config;
pub mod defaults;
pub mod error;
pub mod orchestrator;

pub use checker::{fork_ts_checker, ForkTsChecker, CHECKER_PLUGIN_NAME};
pub use config::{load_settings, settings_from_str, ConfigError};
pub use defaults::{default_rules, variant_config};
pub use error::{HostError, HostResult};
pub use orchestrator::{BuiltVariant, Orchestrator, WarningReport, STANDARD_VARIANTS};
