//! Option resolution
//!
//! Merges three layers, later layers winning per top-level key:
//! 1. Built-in defaults
//! 2. Process-wide `typescript` configuration
//! 3. Module options given at the call site

mod defaults;
mod effective;
mod merge;

pub use defaults::BuiltinDefaults;
pub use effective::{
    is_truthy, load_process_config, ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig,
    PROCESS_CONFIG_KEY,
};
pub use merge::{merge_layers, shallow_merge};
