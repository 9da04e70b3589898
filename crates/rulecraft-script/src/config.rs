//! Assembly Configuration - Active master and failure policy
//!
//! Controls which master the ruleset is assembled under, where manifests
//! are found inside a mod directory, and what happens when one mod fails.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What the assembler does when a single mod fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Roll back the failing mod, record it, and continue with the next one
    #[default]
    SkipMod,
    /// Stop assembly and return the error
    Abort,
}

/// Configuration for ruleset assembly
///
/// # Example
///
/// ```
/// use rulecraft_script::{AssemblyConfig, ErrorPolicy};
///
/// let config = AssemblyConfig::from_ron_str(r#"(active_master: "xcom2")"#).unwrap();
/// assert_eq!(config.active_master(), "xcom2");
/// assert_eq!(config.manifest_file(), "metadata.ron");
/// assert_eq!(config.on_error(), ErrorPolicy::SkipMod);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Id of the master mod the ruleset is built on
    active_master: String,
    /// File name of the manifest inside each mod directory
    manifest_file: String,
    /// Failure handling for individual mods
    on_error: ErrorPolicy,
}

impl AssemblyConfig {
    /// Create a configuration for the given active master
    pub fn with_master(active_master: impl Into<String>) -> Self {
        Self {
            active_master: active_master.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from RON; absent keys take their defaults
    pub fn from_ron_str(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn active_master(&self) -> &str {
        &self.active_master
    }

    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    pub fn on_error(&self) -> ErrorPolicy {
        self.on_error
    }

    pub fn set_manifest_file(&mut self, name: impl Into<String>) {
        self.manifest_file = name.into();
    }

    pub fn set_on_error(&mut self, policy: ErrorPolicy) {
        self.on_error = policy;
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            active_master: "xcom1".to_string(),
            manifest_file: "metadata.ron".to_string(),
            on_error: ErrorPolicy::SkipMod,
        }
    }
}
