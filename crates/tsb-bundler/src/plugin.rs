//! Bundler plugins and the type-checker factory contract.

use serde_json::{Map, Value};
use std::any::Any;
use std::fmt;

/// A plugin attached to a variant configuration.
pub trait BundlerPlugin: fmt::Debug + Send + Sync {
    /// Plugin name, unique per plugin kind.
    fn name(&self) -> &str;

    /// Downcast support for inspecting a concrete plugin.
    fn as_any(&self) -> &dyn Any;
}

/// Logger handed to plugins, scoped to the namespace of the module that
/// created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedLogger {
    scope: String,
}

impl ScopedLogger {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn info(&self, message: &str) {
        tracing::info!(scope = %self.scope, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!(scope = %self.scope, "{}", message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!(scope = %self.scope, "{}", message);
    }
}

/// Options for constructing the out-of-process type checker.
#[derive(Debug, Clone)]
pub struct TypeCheckerOptions {
    /// Checker settings (e.g. "vue", "tsconfig", "formatter")
    pub settings: Map<String, Value>,

    /// Logger the checker reports through
    pub logger: ScopedLogger,
}

impl TypeCheckerOptions {
    /// Get a setting by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

/// Constructs the type-checker plugin.
///
/// Supplied by the orchestrator so modules never look plugins up by name.
pub trait TypeCheckerFactory: Send + Sync {
    fn create(&self, options: TypeCheckerOptions) -> Box<dyn BundlerPlugin>;
}

impl<F> TypeCheckerFactory for F
where
    F: Fn(TypeCheckerOptions) -> Box<dyn BundlerPlugin> + Send + Sync,
{
    fn create(&self, options: TypeCheckerOptions) -> Box<dyn BundlerPlugin> {
        self(options)
    }
}
