//! Per-variant bundler configuration.

use serde::Serialize;
use std::fmt;

use crate::plugin::BundlerPlugin;
use crate::rule::ModuleRule;

/// Identifies the build variant being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantFlags {
    /// Variant targets the client runtime
    pub is_client: bool,

    /// Variant targets the modern output profile
    pub is_modern: bool,
}

impl VariantFlags {
    /// Client bundle, legacy output profile.
    pub fn client() -> Self {
        Self {
            is_client: true,
            is_modern: false,
        }
    }

    /// Client bundle, modern output profile.
    pub fn modern() -> Self {
        Self {
            is_client: true,
            is_modern: true,
        }
    }

    /// Server bundle.
    pub fn server() -> Self {
        Self {
            is_client: false,
            is_modern: false,
        }
    }

    pub fn is_server(&self) -> bool {
        !self.is_client
    }

    /// Short name used in diagnostics.
    pub fn label(&self) -> &'static str {
        match (self.is_client, self.is_modern) {
            (true, false) => "client",
            (true, true) => "modern",
            (false, _) => "server",
        }
    }
}

impl fmt::Display for VariantFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Module resolution settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveConfig {
    /// Extensions tried when resolving extension-less imports (with dot)
    pub extensions: Vec<String>,
}

/// Module rule settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleConfig {
    /// Rules in bundler evaluation order
    pub rules: Vec<ModuleRule>,
}

/// Bundler configuration for one build variant.
#[derive(Debug, Default, Serialize)]
pub struct VariantConfig {
    /// Variant name (e.g. "client")
    pub name: String,

    pub resolve: ResolveConfig,

    pub module: ModuleConfig,

    /// Bundler plugins
    #[serde(serialize_with = "serialize_plugin_names")]
    pub plugins: Vec<Box<dyn BundlerPlugin>>,
}

impl VariantConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Find the first rule whose matcher accepts the file name.
    pub fn find_rule(&self, file_name: &str) -> Option<&ModuleRule> {
        self.module.rules.iter().find(|rule| rule.matches(file_name))
    }

    /// All rules accepting the file name, in stacking order.
    pub fn rules_for<'a>(
        &'a self,
        file_name: &'a str,
    ) -> impl Iterator<Item = &'a ModuleRule> + 'a {
        self.module
            .rules
            .iter()
            .filter(move |rule| rule.matches(file_name))
    }

    /// Names of the attached plugins.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Whether a plugin with the given name is attached.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }
}

fn serialize_plugin_names<S>(
    plugins: &[Box<dyn BundlerPlugin>],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(plugins.iter().map(|plugin| plugin.name()))
}
