//! TypeScript build support
//!
//! A build module that lets a bundler-based front-end build compile
//! `.ts`/`.tsx` sources. It resolves its options, extends the shared build
//! settings, injects TypeScript rules into every build variant, and attaches
//! an out-of-process type checker to the legacy client variant.

pub mod config;
pub mod environment;
pub mod error;
pub mod extension;
pub mod module;
pub mod rules;
pub mod type_check;

pub use config::{BuiltinDefaults, ConfigError, EffectiveConfig};
pub use error::{BuildError, BuildResult};
pub use extension::TsExtension;
pub use module::TypeScriptModule;
