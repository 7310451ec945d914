//! Ambient configuration for the summary MCP server.
//!
//! Configuration is fixed once at server start and passed explicitly into
//! the service; there is no global state. Two of the three options
//! (`include_git_history` and `debug`) are never read by any logic in this
//! workspace: they exist to be surfaced as descriptive text inside the
//! returned instruction document, for the external consumer to act on.
//!
//! # Examples
//!
//! ```
//! use summary_mcp_core::SummaryConfig;
//!
//! let config = SummaryConfig::builder()
//!     .output_directory("./docs")
//!     .debug(true)
//!     .build();
//!
//! assert_eq!(config.resolve_location(None), "./docs");
//! assert_eq!(config.resolve_location(Some("./override")), "./override");
//! ```

use crate::{Error, Result};

/// Location used when neither a per-call override nor a configured output
/// directory is available.
pub const DEFAULT_LOCATION: &str = "workspace root";

/// Environment variable naming the default output directory.
const ENV_OUTPUT_DIR: &str = "SUMMARY_OUTPUT_DIR";

/// Environment variable toggling the git-history note (surfaced as text only).
const ENV_INCLUDE_GIT_HISTORY: &str = "SUMMARY_INCLUDE_GIT_HISTORY";

/// Environment variable toggling the debug note (surfaced as text only).
const ENV_DEBUG: &str = "SUMMARY_DEBUG";

/// Ambient configuration supplied once per server instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Default directory for `output_file.location` when a call supplies no
    /// override. `None` falls back to the literal `"workspace root"`.
    pub output_directory: Option<String>,

    /// Whether the instructions should tell the consumer to inspect recent
    /// git history. Surfaced as text inside the document; never consumed by
    /// logic here.
    pub include_git_history: bool,

    /// Whether the instructions should tell the consumer to narrate its
    /// progress. Surfaced as text inside the document; never consumed by
    /// logic here.
    pub debug: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            include_git_history: true,
            debug: false,
        }
    }
}

impl SummaryConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::default()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads `SUMMARY_OUTPUT_DIR`, `SUMMARY_INCLUDE_GIT_HISTORY`, and
    /// `SUMMARY_DEBUG`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a boolean variable holds a value
    /// that cannot be parsed as true or false.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::debug!(?config, "loaded configuration from environment");
        Ok(config)
    }

    /// Resolves the effective `output_file.location` for one call.
    ///
    /// Precedence: per-call override, then the configured default, then the
    /// literal `"workspace root"`. The override is accepted as opaque text;
    /// no validation is performed.
    #[must_use]
    pub fn resolve_location<'a>(&'a self, override_path: Option<&'a str>) -> &'a str {
        override_path.unwrap_or_else(|| self.output_directory.as_deref().unwrap_or(DEFAULT_LOCATION))
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Split out from [`Self::from_env`] so tests can supply values without
    /// mutating the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let include_git_history = match lookup(ENV_INCLUDE_GIT_HISTORY) {
            Some(raw) => parse_flag(ENV_INCLUDE_GIT_HISTORY, &raw)?,
            None => defaults.include_git_history,
        };

        let debug = match lookup(ENV_DEBUG) {
            Some(raw) => parse_flag(ENV_DEBUG, &raw)?,
            None => defaults.debug,
        };

        Ok(Self {
            output_directory: lookup(ENV_OUTPUT_DIR),
            include_git_history,
            debug,
        })
    }
}

/// Parses a boolean environment value.
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::ConfigError {
            message: format!("{name} must be a boolean, got '{other}'"),
        }),
    }
}

/// Builder for [`SummaryConfig`].
#[derive(Debug, Default)]
pub struct SummaryConfigBuilder {
    output_directory: Option<String>,
    include_git_history: Option<bool>,
    debug: Option<bool>,
}

impl SummaryConfigBuilder {
    /// Sets the default output directory.
    #[must_use]
    pub fn output_directory(mut self, dir: impl Into<String>) -> Self {
        self.output_directory = Some(dir.into());
        self
    }

    /// Sets whether the instructions mention git-history inspection.
    #[must_use]
    pub const fn include_git_history(mut self, value: bool) -> Self {
        self.include_git_history = Some(value);
        self
    }

    /// Sets whether the instructions mention debug narration.
    #[must_use]
    pub const fn debug(mut self, value: bool) -> Self {
        self.debug = Some(value);
        self
    }

    /// Builds the configuration, applying defaults for unset options.
    #[must_use]
    pub fn build(self) -> SummaryConfig {
        let defaults = SummaryConfig::default();
        SummaryConfig {
            output_directory: self.output_directory,
            include_git_history: self
                .include_git_history
                .unwrap_or(defaults.include_git_history),
            debug: self.debug.unwrap_or(defaults.debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = SummaryConfig::default();
        assert_eq!(config.output_directory, None);
        assert!(config.include_git_history);
        assert!(!config.debug);
    }

    #[test]
    fn resolve_location_prefers_override() {
        let config = SummaryConfig::builder().output_directory("./cfg").build();
        assert_eq!(config.resolve_location(Some("./override")), "./override");
    }

    #[test]
    fn resolve_location_falls_back_to_configured_directory() {
        let config = SummaryConfig::builder().output_directory("./cfg").build();
        assert_eq!(config.resolve_location(None), "./cfg");
    }

    #[test]
    fn resolve_location_falls_back_to_workspace_root() {
        let config = SummaryConfig::default();
        assert_eq!(config.resolve_location(None), DEFAULT_LOCATION);
    }

    #[test]
    fn resolve_location_accepts_empty_override() {
        // Overrides are opaque text; empty is not special-cased.
        let config = SummaryConfig::builder().output_directory("./cfg").build();
        assert_eq!(config.resolve_location(Some("")), "");
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let lookup = lookup_from(&[
            ("SUMMARY_OUTPUT_DIR", "./docs"),
            ("SUMMARY_INCLUDE_GIT_HISTORY", "false"),
            ("SUMMARY_DEBUG", "true"),
        ]);

        let config = SummaryConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.output_directory.as_deref(), Some("./docs"));
        assert!(!config.include_git_history);
        assert!(config.debug);
    }

    #[test]
    fn from_lookup_empty_environment_yields_defaults() {
        let config = SummaryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SummaryConfig::default());
    }

    #[test]
    fn from_lookup_rejects_malformed_boolean() {
        let lookup = lookup_from(&[("SUMMARY_DEBUG", "maybe")]);
        let err = SummaryConfig::from_lookup(lookup).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("SUMMARY_DEBUG"));
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        for value in ["1", "true", "YES", "On"] {
            assert!(parse_flag("X", value).unwrap());
        }
        for value in ["0", "false", "NO", "Off"] {
            assert!(!parse_flag("X", value).unwrap());
        }
    }
}
