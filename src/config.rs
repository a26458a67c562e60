//! Plugin configuration.
//!
//! Three flat keys control where the authors source lives, what the generated
//! page is called, and which top-level key carries the page params:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! authors_file = ".authors.yml"    # Sibling of the docs directory
//! output_page = "authors.md"       # Path of the generated virtual page
//! page_params_key = "page_params"  # Top-level key for page-level settings
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early. A missing config file yields the stock
//! defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Plugin configuration loaded from a TOML file or built from defaults.
///
/// User config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Name of the authors YAML file, looked up one level above the docs
    /// directory.
    pub authors_file: String,
    /// Path of the generated page within the docs tree.
    pub output_page: String,
    /// Top-level source key holding the page-level rendering settings.
    pub page_params_key: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            authors_file: ".authors.yml".to_string(),
            output_page: "authors.md".to_string(),
            page_params_key: "page_params".to_string(),
        }
    }
}

impl PluginConfig {
    /// Load config from `path`. A missing file yields the stock defaults;
    /// an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Authors Page Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Name of the authors YAML file. Resolved as a sibling of the docs
# directory (i.e. in the project root for the conventional layout).
authors_file = ".authors.yml"

# Path of the generated page, relative to the docs directory. This is the
# path the page is registered under and served from.
output_page = "authors.md"

# Top-level key in the authors file that holds page-level settings
# (title, description, avatar_size, avatar_shape, avatar_align).
page_params_key = "page_params"
"##
}
