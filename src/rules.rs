//! Rule injection
//!
//! Teaches one variant configuration to resolve and load TypeScript files.
//! The loader chain of the `.jsx` rule is reused: its last stage (the
//! transpiler) runs after ts-loader, so framework transforms configured for
//! script files also apply to TypeScript.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};
use tsb_bundler::{LoaderDescriptor, ModuleRule, RuleMatcher, VariantConfig, VariantFlags};

use crate::config::EffectiveConfig;
use crate::error::{BuildError, BuildResult};
use crate::extension::TsExtension;

/// File name probed to locate the reference rule
pub const REFERENCE_PROBE: &str = ".jsx";

/// Loader that compiles TypeScript
pub const TS_LOADER: &str = "ts-loader";

/// Template files whose script blocks ts-loader must treat as TypeScript
pub const TEMPLATE_FILE_PATTERN: &str = r"\.vue$";

/// Locate the last loader stage of the reference rule.
pub fn reference_stage(config: &VariantConfig) -> BuildResult<&LoaderDescriptor> {
    let rule = config
        .find_rule(REFERENCE_PROBE)
        .ok_or_else(|| BuildError::MissingReferenceRule {
            probe: REFERENCE_PROBE.to_string(),
        })?;

    rule.last_stage()
        .ok_or_else(|| BuildError::EmptyReferenceChain { rule: rule.label() })
}

/// ts-loader options for one extension.
///
/// Generated defaults come first; user overrides replace them key by key.
pub fn ts_loader_options(
    ext: TsExtension,
    overrides: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("transpileOnly".to_string(), Value::Bool(true));
    options.insert(
        ext.suffix_directive().to_string(),
        json!([TEMPLATE_FILE_PATTERN]),
    );

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            options.insert(key.clone(), value.clone());
        }
    }

    options
}

/// Build the rule for one extension on top of the reused stage.
pub fn typescript_rule(
    ext: TsExtension,
    prior: LoaderDescriptor,
    overrides: Option<&Map<String, Value>>,
) -> BuildResult<ModuleRule> {
    Ok(ModuleRule::new(
        RuleMatcher::for_extension(ext.as_str())?,
        vec![
            prior,
            LoaderDescriptor::configured(TS_LOADER, ts_loader_options(ext, overrides)),
        ],
    ))
}

/// Append TypeScript resolution and rules to a variant configuration.
///
/// Fails without modifying the configuration when the reference rule is
/// missing or has an empty loader chain.
pub fn inject_rules(
    config: &mut VariantConfig,
    flags: VariantFlags,
    options: &EffectiveConfig,
) -> BuildResult<()> {
    let prior = match reference_stage(config) {
        Ok(stage) => stage.clone(),
        Err(e) => {
            warn!(variant = %flags, error = %e, "reference rule lookup failed");
            return Err(e);
        }
    };

    let rules = TsExtension::ALL
        .iter()
        .map(|ext| typescript_rule(*ext, prior.clone(), options.loader_overrides(ext.as_str())))
        .collect::<BuildResult<Vec<_>>>()?;

    config
        .resolve
        .extensions
        .extend(TsExtension::ALL.iter().map(|ext| ext.dotted().to_string()));
    config.module.rules.extend(rules);

    debug!(
        variant = %flags,
        reused_loader = prior.loader(),
        rule_count = config.module.rules.len(),
        "injected TypeScript rules"
    );

    Ok(())
}
