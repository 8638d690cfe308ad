//! Deployment environment selector.

use std::fmt;

/// Environment the application is running in.
///
/// Drives which configuration file is loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local development, alias "dev".
    #[default]
    Development,
    Staging,
    /// Alias "prod".
    Production,
}

impl Environment {
    /// Resolves a raw command-line value into an environment.
    ///
    /// Matching is case-sensitive. Unrecognised values, including the empty
    /// string, fall back to [`Environment::Development`].
    pub fn resolve(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or_default()
    }

    /// Returns the environment named by `raw`, or `None` if it is not one of
    /// the accepted aliases.
    pub fn recognize(raw: &str) -> Option<Self> {
        match raw {
            "dev" | "development" => Some(Environment::Development),
            "staging" => Some(Environment::Staging),
            "prod" | "production" => Some(Environment::Production),
            _ => None,
        }
    }

    /// Canonical name of the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
