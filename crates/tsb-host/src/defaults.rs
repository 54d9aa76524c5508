//! Default per-variant bundler configuration
//!
//! Every variant starts from the same rule set; only the transpiler preset
//! differs between client, modern and server builds.

use serde_json::{json, Map, Value};
use tsb_bundler::{LoaderDescriptor, ModuleRule, RuleMatcher, VariantConfig, VariantFlags};

/// Extensions tried when resolving extension-less imports
pub const RESOLVE_EXTENSIONS: &[&str] = &[".wasm", ".mjs", ".js", ".json", ".vue", ".jsx"];

/// Image files inlined below this many bytes
const URL_LOADER_LIMIT: u64 = 1000;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Transpiler stage for script files.
pub fn babel_loader(flags: VariantFlags) -> LoaderDescriptor {
    LoaderDescriptor::configured(
        "babel-loader",
        object(json!({
            "babelrc": false,
            "cacheDirectory": true,
            "presets": [[
                "@nuxt/babel-preset-app",
                {
                    "buildTarget": if flags.is_client { "client" } else { "server" },
                    "modern": flags.is_modern,
                }
            ]],
        })),
    )
}

/// Default rules, in evaluation order.
pub fn default_rules(flags: VariantFlags) -> Result<Vec<ModuleRule>, regex_lite::Error> {
    let style_loader = if flags.is_client {
        "vue-style-loader"
    } else {
        "null-loader"
    };

    Ok(vec![
        ModuleRule::new(
            RuleMatcher::new(r"\.vue$")?,
            vec![LoaderDescriptor::Name("vue-loader".to_string())],
        ),
        ModuleRule::new(
            RuleMatcher::new(r"\.m?jsx?$")?,
            vec![babel_loader(flags)],
        ),
        ModuleRule::new(
            RuleMatcher::new(r"\.css$")?,
            vec![
                LoaderDescriptor::Name(style_loader.to_string()),
                LoaderDescriptor::configured("css-loader", object(json!({"importLoaders": 1}))),
            ],
        ),
        ModuleRule::new(
            RuleMatcher::new(r"(?i)\.(png|jpe?g|gif|svg|webp|avif)$")?,
            vec![LoaderDescriptor::configured(
                "url-loader",
                object(json!({
                    "limit": URL_LOADER_LIMIT,
                    "name": "img/[name].[contenthash:7].[ext]"
                })),
            )],
        ),
    ])
}

/// Fresh configuration for one variant.
pub fn variant_config(flags: VariantFlags) -> Result<VariantConfig, regex_lite::Error> {
    let mut config = VariantConfig::new(flags.label());
    config.resolve.extensions = RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect();
    config.module.rules = default_rules(flags)?;
    Ok(config)
}
