//! Stock type-checker plugin
//!
//! Stands in for the out-of-process checker: it records the options it was
//! built with so the resulting configuration can be inspected.

use std::any::Any;
use tsb_bundler::{BundlerPlugin, TypeCheckerOptions};

/// Plugin name of the type checker
pub const CHECKER_PLUGIN_NAME: &str = "fork-ts-checker-webpack-plugin";

/// Type-checker plugin handle
#[derive(Debug, Clone)]
pub struct ForkTsChecker {
    options: TypeCheckerOptions,
}

impl ForkTsChecker {
    pub fn new(options: TypeCheckerOptions) -> Self {
        options
            .logger
            .info("type checking runs in a separate process");
        Self { options }
    }

    pub fn options(&self) -> &TypeCheckerOptions {
        &self.options
    }
}

impl BundlerPlugin for ForkTsChecker {
    fn name(&self) -> &str {
        CHECKER_PLUGIN_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory function suitable for `TypeCheckerFactory`.
pub fn fork_ts_checker(options: TypeCheckerOptions) -> Box<dyn BundlerPlugin> {
    Box::new(ForkTsChecker::new(options))
}
