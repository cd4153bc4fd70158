//! Output configuration.
//!
//! # Example
//!
//! ```rust
//! use chatclean::config::OutputConfig;
//!
//! let config = OutputConfig::new().compact();
//! assert!(!config.pretty);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how the cleaned dataset is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the JSON output with two spaces (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes single-line JSON.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Enables or disables indentation.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
