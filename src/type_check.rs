//! Type-checker gate
//!
//! The checker runs out of process and reports on the whole source tree, so
//! one variant is enough: it is attached to the legacy client build only.

use serde_json::{Map, Value};
use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use tsb_bundler::{
    ScopedLogger, TypeCheckerFactory, TypeCheckerOptions, VariantConfig, VariantFlags,
};

use crate::config::EffectiveConfig;

/// Logger scope handed to the checker
pub const LOGGER_SCOPE: &str = "nuxt:typescript";

/// Type configuration file, relative to the project root
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Diagnostic formatter used by the checker
pub const FORMATTER: &str = "codeframe";

/// Absolute, normalised form of the project root.
///
/// A relative root is taken against the current directory; `.` and `..`
/// components are folded lexically.
pub fn resolve_root(root_dir: &Path) -> io::Result<PathBuf> {
    let joined = if root_dir.is_absolute() {
        root_dir.to_path_buf()
    } else {
        env::current_dir()?.join(root_dir)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Whether the checker belongs on this variant.
pub fn should_attach(type_check: bool, flags: VariantFlags) -> bool {
    type_check && flags.is_client && !flags.is_modern
}

/// Checker options: generated defaults, then user options on top.
pub fn checker_options(
    root_dir: &Path,
    overrides: Option<&Map<String, Value>>,
) -> TypeCheckerOptions {
    let mut settings = Map::new();
    settings.insert("vue".to_string(), Value::Bool(true));
    settings.insert(
        "tsconfig".to_string(),
        Value::String(root_dir.join(TSCONFIG_FILE).to_string_lossy().to_string()),
    );
    settings.insert("formatter".to_string(), Value::String(FORMATTER.to_string()));

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            settings.insert(key.clone(), value.clone());
        }
    }

    TypeCheckerOptions {
        settings,
        logger: ScopedLogger::new(LOGGER_SCOPE),
    }
}

/// Attach the type checker to the variant when the gate allows it.
///
/// Returns whether a plugin was attached.
pub fn attach_type_checker(
    config: &mut VariantConfig,
    flags: VariantFlags,
    options: &EffectiveConfig,
    root_dir: &Path,
    factory: &dyn TypeCheckerFactory,
) -> bool {
    if !should_attach(options.type_check_enabled(), flags) {
        debug!(variant = %flags, "type checker not attached");
        return false;
    }

    let plugin = factory.create(checker_options(root_dir, options.type_check_overrides()));
    info!(variant = %flags, plugin = plugin.name(), "attached type checker");
    config.plugins.push(plugin);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuiltinDefaults;
    use serde_json::json;
    use std::any::Any;
    use tsb_bundler::BundlerPlugin;

    #[derive(Debug)]
    struct FakeChecker(TypeCheckerOptions);

    impl BundlerPlugin for FakeChecker {
        fn name(&self) -> &str {
            "fork-ts-checker"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn factory(options: TypeCheckerOptions) -> Box<dyn BundlerPlugin> {
        Box::new(FakeChecker(options))
    }

    fn options(module: serde_json::Value) -> EffectiveConfig {
        EffectiveConfig::resolve(&BuiltinDefaults::default(), None, Some(module))
    }

    fn attach(type_check: serde_json::Value, flags: VariantFlags) -> VariantConfig {
        let mut config = VariantConfig::new(flags.label());
        attach_type_checker(
            &mut config,
            flags,
            &options(json!({"typeCheck": type_check})),
            Path::new("/srv/app"),
            &factory,
        );
        config
    }

    #[test]
    fn test_resolve_root_absolute() {
        assert_eq!(resolve_root(Path::new("/srv/app")).unwrap(), PathBuf::from("/srv/app"));
        assert_eq!(
            resolve_root(Path::new("/srv/./app/src/..")).unwrap(),
            PathBuf::from("/srv/app")
        );
    }

    #[test]
    fn test_resolve_root_relative() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_root(Path::new("app")).unwrap(), cwd.join("app"));
        assert_eq!(resolve_root(Path::new("")).unwrap(), cwd);
        assert!(resolve_root(Path::new("./app/../web")).unwrap().is_absolute());
    }

    #[test]
    fn test_gate_decision() {
        assert!(should_attach(true, VariantFlags::client()));
        assert!(!should_attach(true, VariantFlags::modern()));
        assert!(!should_attach(true, VariantFlags::server()));
        assert!(!should_attach(false, VariantFlags::client()));
    }

    #[test]
    fn test_attached_to_legacy_client() {
        let config = attach(json!(true), VariantFlags::client());
        assert_eq!(config.plugin_names(), vec!["fork-ts-checker"]);
    }

    #[test]
    fn test_not_attached_to_modern_client() {
        assert!(attach(json!(true), VariantFlags::modern()).plugins.is_empty());
    }

    #[test]
    fn test_not_attached_to_server() {
        assert!(attach(json!(true), VariantFlags::server()).plugins.is_empty());
        let server_modern = VariantFlags {
            is_client: false,
            is_modern: true,
        };
        assert!(attach(json!(true), server_modern).plugins.is_empty());
    }

    #[test]
    fn test_not_attached_when_disabled() {
        for flags in [VariantFlags::client(), VariantFlags::modern(), VariantFlags::server()] {
            assert!(attach(json!(false), flags).plugins.is_empty());
        }
    }

    #[test]
    fn test_checker_options() {
        let config = attach(json!(true), VariantFlags::client());
        let checker = config.plugins[0]
            .as_any()
            .downcast_ref::<FakeChecker>()
            .unwrap();

        assert_eq!(checker.0.get("vue"), Some(&json!(true)));
        assert_eq!(checker.0.get("formatter"), Some(&json!("codeframe")));
        assert_eq!(
            checker.0.get("tsconfig"),
            Some(&json!(Path::new("/srv/app").join("tsconfig.json").to_string_lossy()))
        );
        assert_eq!(checker.0.logger.scope(), "nuxt:typescript");
    }

    #[test]
    fn test_user_options_merged_on_top() {
        let config = attach(
            json!({"formatter": "default", "memoryLimit": 4096}),
            VariantFlags::client(),
        );
        let checker = config.plugins[0]
            .as_any()
            .downcast_ref::<FakeChecker>()
            .unwrap();

        assert_eq!(checker.0.get("formatter"), Some(&json!("default")));
        assert_eq!(checker.0.get("memoryLimit"), Some(&json!(4096)));
        assert_eq!(checker.0.get("vue"), Some(&json!(true)));
    }
}
