//! Orchestrator errors.

use thiserror::Error;
use tsb_bundler::ModuleError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum HostError {
    /// A module hook failed; build setup stops here.
    #[error("module '{module}' failed during {phase}: {source}")]
    Module {
        module: String,
        phase: String,
        #[source]
        source: ModuleError,
    },

    #[error("invalid default rule pattern: {0}")]
    Pattern(#[from] regex_lite::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for orchestrator operations
pub type HostResult<T> = Result<T, HostError>;
