//! Project build configuration (build.toml)
//!
//! Top-level keys configure the shared settings; every other table is
//! handed to modules as their option table, keyed by table name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tsb_bundler::{toml_to_json, SharedBuildSettings};

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Parse shared settings from a TOML string.
///
/// `root_dir` is used when the document has no `rootDir` key.
pub fn settings_from_str(s: &str, root_dir: &Path) -> Result<SharedBuildSettings, ConfigError> {
    let mut document: toml::Table = toml::from_str(s)?;

    let root_dir = match document.remove("rootDir") {
        Some(toml::Value::String(dir)) => PathBuf::from(dir),
        Some(other) => {
            return Err(ConfigError::ValidationError(format!(
                "'rootDir' must be a string, got {}",
                other.type_str()
            )))
        }
        None => root_dir.to_path_buf(),
    };

    let mut settings = SharedBuildSettings::new(root_dir);

    if let Some(extensions) = document.remove("extensions") {
        let toml::Value::Array(items) = extensions else {
            return Err(ConfigError::ValidationError(
                "'extensions' must be an array of strings".to_string(),
            ));
        };
        settings.extensions = items
            .into_iter()
            .map(|item| match item {
                toml::Value::String(ext) => Ok(ext),
                other => Err(ConfigError::ValidationError(format!(
                    "extension entries must be strings, got {}",
                    other.type_str()
                ))),
            })
            .collect::<Result<_, _>>()?;
    }

    for (key, value) in document {
        if let toml::Value::Table(_) = value {
            settings.set_module_options(key, toml_to_json(value));
        }
    }

    Ok(settings)
}

/// Load shared settings from a build configuration file. The file's
/// directory is the default project root.
pub fn load_settings(path: &Path) -> Result<SharedBuildSettings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let root_dir = path.parent().unwrap_or_else(|| Path::new("."));
    settings_from_str(&contents, root_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal() {
        let settings = settings_from_str("", Path::new("/srv/app")).unwrap();
        assert_eq!(settings.root_dir, PathBuf::from("/srv/app"));
        assert_eq!(settings.extensions, vec!["js", "mjs"]);
        assert!(settings.module_options.is_empty());
    }

    #[test]
    fn test_full() {
        let toml = r#"
rootDir = "/work/site"
extensions = ["js", "mjs", "ts"]

[typescript]
ignoreNotFoundWarnings = true

[typescript.typeCheck]
memoryLimit = 4096
"#;
        let settings = settings_from_str(toml, Path::new("/ignored")).unwrap();

        assert_eq!(settings.root_dir, PathBuf::from("/work/site"));
        assert_eq!(settings.extensions, vec!["js", "mjs", "ts"]);
        assert_eq!(
            settings.module_options("typescript"),
            Some(&json!({
                "ignoreNotFoundWarnings": true,
                "typeCheck": {"memoryLimit": 4096}
            }))
        );
    }

    #[test]
    fn test_module_table_datetime_as_string() {
        let toml = "[typescript]\nbuiltAt = 2024-05-01T10:00:00Z\n";
        let settings = settings_from_str(toml, Path::new("/srv/app")).unwrap();

        assert_eq!(
            settings.module_options("typescript"),
            Some(&json!({"builtAt": "2024-05-01T10:00:00Z"}))
        );
    }

    #[test]
    fn test_invalid_root_dir() {
        let result = settings_from_str("rootDir = 3", Path::new("/srv/app"));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_extensions() {
        let result = settings_from_str("extensions = [1, 2]", Path::new("/srv/app"));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = settings_from_str("[typescript", Path::new("/srv/app"));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_settings_defaults_root_to_file_dir() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[typescript]").unwrap();
        writeln!(temp, "typeCheck = false").unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.root_dir, temp.path().parent().unwrap());
        assert_eq!(settings.module_options("typescript"), Some(&json!({"typeCheck": false})));
    }
}
