//! Harness configuration.
//!
//! The build mode reported by the preprocessor lesson comes from:
//! - the `CPRIMER_BUILD_MODE` environment variable at run time, if set;
//! - otherwise `CPRIMER_BUILD_MODE` as it was when the crate was compiled;
//! - otherwise `dev`.

use cprimer_core::lang::build::compiled_build_mode;

/// Name of the variable consulted at run time and at compile time.
pub const BUILD_MODE_VAR: &str = "CPRIMER_BUILD_MODE";

/// Build flavour the programs report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    #[default]
    Dev,
    Prod,
}

impl BuildMode {
    /// Parse from string (case-insensitive). Unknown names fall back to
    /// [`BuildMode::Dev`].
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" | "release" => Self::Prod,
            _ => Self::Dev,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings shared by every program in one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub build_mode: BuildMode,
}

impl HarnessConfig {
    /// Resolve from a variable lookup; `lookup` stands in for the process
    /// environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let build_mode = lookup(BUILD_MODE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(
                || BuildMode::from_str_loose(compiled_build_mode()),
                |v| BuildMode::from_str_loose(&v),
            );
        Self { build_mode }
    }

    /// Resolve from the real process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_mode: BuildMode::from_str_loose(compiled_build_mode()),
        }
    }
}
