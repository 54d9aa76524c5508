//! Shared settings extension
//!
//! Runs once per build setup, before any variant configuration exists.
//! Applies the following delta to the shared settings:
//! - banner colour set to blue
//! - `ts` present exactly once in the recognised extensions
//! - `ts` and `tsx` present in the watched extensions
//! - two syntax plugins appended to the transpiler plugin list
//! - optionally, a filter for not-found re-export warnings

use regex_lite::Regex;
use tracing::debug;
use tsb_bundler::{BuildWarning, SharedBuildSettings, WarningFilter};

use crate::config::EffectiveConfig;
use crate::error::BuildResult;
use crate::extension::TsExtension;

/// CLI banner colour while this module is active
pub const BANNER_COLOR: &str = "blue";

/// Transpiler plugins for optional chaining and nullish coalescing
pub const BABEL_PLUGINS: &[&str] = &[
    "@babel/plugin-proposal-nullish-coalescing-operator",
    "@babel/plugin-proposal-optional-chaining",
];

/// Category of the suppressed warnings
pub const NOT_FOUND_WARNING_NAME: &str = "ModuleDependencyWarning";

/// Message pattern of a re-exported type that is absent at runtime
pub const NOT_FOUND_MESSAGE_PATTERN: &str = "export .* was not found in ";

/// Build the filter that suppresses not-found re-export warnings.
pub fn not_found_export_filter() -> BuildResult<WarningFilter> {
    let pattern = Regex::new(NOT_FOUND_MESSAGE_PATTERN)?;
    Ok(WarningFilter::new("typescript:not-found-exports", move |warning: &BuildWarning| {
        warning.name == NOT_FOUND_WARNING_NAME && pattern.is_match(&warning.message)
    }))
}

/// Apply the module's delta to the shared settings.
pub fn extend(settings: &mut SharedBuildSettings, options: &EffectiveConfig) -> BuildResult<()> {
    settings.cli.banner_color = BANNER_COLOR.to_string();

    let primary = TsExtension::Ts.as_str();
    if !settings.extensions.iter().any(|e| e == primary) {
        settings.extensions.push(primary.to_string());
    }

    for ext in TsExtension::ALL {
        let ext = ext.as_str();
        if !settings.build.additional_extensions.iter().any(|e| e == ext) {
            settings.build.additional_extensions.push(ext.to_string());
        }
    }

    settings
        .build
        .babel
        .plugins
        .get_or_insert_with(Vec::new)
        .extend(BABEL_PLUGINS.iter().map(|p| p.to_string()));

    if options.ignore_not_found_warnings() {
        settings
            .build
            .warning_ignore_filters
            .push(not_found_export_filter()?);
        debug!("installed not-found export warning filter");
    }

    debug!(
        extensions = ?settings.extensions,
        additional_extensions = ?settings.build.additional_extensions,
        "extended shared build settings"
    );

    Ok(())
}
