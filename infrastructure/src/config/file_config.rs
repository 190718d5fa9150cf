//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use intake_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Interview settings
    pub intake: FileIntakeConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// Raw interview configuration from TOML (`[intake]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIntakeConfig {
    /// Path to a TOML form file; the built-in form is used when unset
    pub form: Option<String>,
    /// Enable the `?` explanation side-channel
    pub explain: bool,
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Final dump format (uses domain type)
    pub format: Option<OutputFormat>,
}
