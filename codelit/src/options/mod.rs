//! Stringifier options.
//!
//! Options are usually built in code, but can also be read from a small TOML
//! file:
//!
//! ```toml
//! full-type-names = true
//! verbatim-threshold = 5
//! ```

mod error;

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{Error, Result};

use crate::stringify::escape::DEFAULT_VERBATIM_THRESHOLD;

/// Default filename reported in parse errors for in-memory options.
const DEFAULT_FILENAME: &str = "codelit.toml";

/// Settings that affect how values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct StringifyOptions {
    /// Prefix type names with their namespace.
    pub full_type_names: bool,
    /// Number of escape-worthy characters a string may hold before it is
    /// written as a verbatim literal.
    pub verbatim_threshold: usize,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            full_type_names: false,
            verbatim_threshold: DEFAULT_VERBATIM_THRESHOLD,
        }
    }
}

impl StringifyOptions {
    pub fn with_full_type_names(mut self, enabled: bool) -> Self {
        self.full_type_names = enabled;
        self
    }

    pub fn with_verbatim_threshold(mut self, threshold: usize) -> Self {
        self.verbatim_threshold = threshold;
        self
    }

    /// Load options from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        let options = Self::from_str_with_filename(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            full_type_names = options.full_type_names,
            verbatim_threshold = options.verbatim_threshold,
            "loaded stringify options"
        );
        Ok(options)
    }

    /// Parse options from TOML text with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

impl FromStr for StringifyOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}
