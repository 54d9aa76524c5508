//! TypeScript source extensions handled by this module.

use std::fmt;

/// A TypeScript source extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsExtension {
    Ts,
    Tsx,
}

impl TsExtension {
    /// All extensions, primary first.
    pub const ALL: [TsExtension; 2] = [TsExtension::Ts, TsExtension::Tsx];

    /// Extension without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            TsExtension::Ts => "ts",
            TsExtension::Tsx => "tsx",
        }
    }

    /// Extension with the leading dot, as used in module resolution.
    pub fn dotted(&self) -> &'static str {
        match self {
            TsExtension::Ts => ".ts",
            TsExtension::Tsx => ".tsx",
        }
    }

    /// ts-loader option that makes template-file blocks resolvable as this
    /// extension.
    pub fn suffix_directive(&self) -> &'static str {
        match self {
            TsExtension::Ts => "appendTsSuffixTo",
            TsExtension::Tsx => "appendTsxSuffixTo",
        }
    }
}

impl fmt::Display for TsExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
