//! Module rules: a file-name matcher paired with an ordered loader chain.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// File-name matcher of a module rule.
///
/// Wraps a compiled pattern and keeps its source so rules can be compared
/// and serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleMatcher {
    regex: Regex,
}

impl RuleMatcher {
    /// Compile a matcher from a pattern.
    pub fn new(pattern: &str) -> Result<Self, regex_lite::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Case-insensitive matcher for names ending in `.<extension>`.
    pub fn for_extension(extension: &str) -> Result<Self, regex_lite::Error> {
        Self::new(&format!(r"(?i)\.{}$", regex_lite::escape(extension)))
    }

    /// Whether the file name is accepted by this matcher.
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for RuleMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RuleMatcher {}

impl fmt::Debug for RuleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl fmt::Display for RuleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl TryFrom<String> for RuleMatcher {
    type Error = regex_lite::Error;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(&pattern)
    }
}

impl From<RuleMatcher> for String {
    fn from(matcher: RuleMatcher) -> Self {
        matcher.as_str().to_string()
    }
}

/// One stage of a loader chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderDescriptor {
    /// A stage referenced by loader name only.
    Name(String),

    /// A stage with explicit options.
    Configured {
        loader: String,
        #[serde(default)]
        options: Map<String, Value>,
    },
}

impl LoaderDescriptor {
    /// Build a configured stage.
    pub fn configured(loader: impl Into<String>, options: Map<String, Value>) -> Self {
        Self::Configured {
            loader: loader.into(),
            options,
        }
    }

    /// Loader name of this stage.
    pub fn loader(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Configured { loader, .. } => loader,
        }
    }

    /// Options of this stage (None for name-only stages).
    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Name(_) => None,
            Self::Configured { options, .. } => Some(options),
        }
    }
}

/// A bundler module rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// File-name matcher. Rules without one (e.g. resource-query rules)
    /// never match by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<RuleMatcher>,

    /// Loader chain, applied last to first by the bundler.
    #[serde(default, rename = "use")]
    pub uses: Vec<LoaderDescriptor>,
}

impl ModuleRule {
    pub fn new(test: RuleMatcher, uses: Vec<LoaderDescriptor>) -> Self {
        Self {
            test: Some(test),
            uses,
        }
    }

    /// Whether this rule applies to the given file name.
    pub fn matches(&self, file_name: &str) -> bool {
        self.test
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(file_name))
    }

    /// Last configured stage of the chain.
    pub fn last_stage(&self) -> Option<&LoaderDescriptor> {
        self.uses.last()
    }

    /// Short label for diagnostics.
    pub fn label(&self) -> String {
        match &self.test {
            Some(matcher) => matcher.to_string(),
            None => "<no test>".to_string(),
        }
    }
}
