//! Error types for the TypeScript build module.

use thiserror::Error;

use crate::config::ConfigError;

/// Build setup errors
#[derive(Debug, Error)]
pub enum BuildError {
    /// No rule accepts the reference file type. The host's default rule
    /// set changed incompatibly.
    #[error("no module rule matches reference file '{probe}'; cannot reuse its loader chain")]
    MissingReferenceRule { probe: String },

    /// The reference rule has no loader to reuse.
    #[error("module rule {rule} matching the reference file has an empty loader chain")]
    EmptyReferenceChain { rule: String },

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] regex_lite::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot resolve project root: {0}")]
    RootDir(#[source] std::io::Error),

    #[error("extend_build called before setup")]
    NotSetUp,
}

/// Result type for build setup
pub type BuildResult<T> = Result<T, BuildError>;
