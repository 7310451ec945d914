//! Error types for the summary MCP server.
//!
//! Document construction is pure and infallible, so the error surface here
//! is deliberately small: only configuration loading can fail.
//!
//! # Examples
//!
//! ```
//! use summary_mcp_core::{Error, Result};
//!
//! fn parse_flag(value: &str) -> Result<bool> {
//!     match value {
//!         "true" => Ok(true),
//!         "false" => Ok(false),
//!         other => Err(Error::ConfigError {
//!             message: format!("expected a boolean, got '{other}'"),
//!         }),
//!     }
//! }
//!
//! let err = parse_flag("maybe").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for the summary MCP server crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when environment-supplied configuration is malformed, for
    /// example a boolean option set to a value that is neither true nor
    /// false.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Convenience result type used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_includes_message() {
        let err = Error::ConfigError {
            message: "SUMMARY_DEBUG must be a boolean".to_string(),
        };
        assert!(err.to_string().contains("SUMMARY_DEBUG"));
        assert!(err.is_config_error());
    }
}
