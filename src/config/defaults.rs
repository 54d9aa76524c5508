//! Built-in defaults (layer 1)
//!
//! Every option consumed downstream has a value here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Built-in default option values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinDefaults {
    /// Suppress "export ... was not found in ..." warnings (default: false)
    pub ignore_not_found_warnings: bool,

    /// Attach the type checker (default: true)
    pub type_check: bool,

    /// Per-extension loader overrides (default: none)
    pub loaders: Map<String, Value>,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            ignore_not_found_warnings: false,
            type_check: true,
            loaders: Map::new(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "ignoreNotFoundWarnings": self.ignore_not_found_warnings,
            "typeCheck": self.type_check,
            "loaders": self.loaders,
        })
    }
}
