//! Growth configuration shared by the array-backed containers.
//!
//! ```toml
//! initial_capacity = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DsaError, Result};

pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub initial_capacity: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl GrowthConfig {
    pub fn new(initial_capacity: usize) -> Result<Self> {
        Self { initial_capacity }.validate()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()
    }

    /// Loads a config file, picking the format from the extension and
    /// falling back to sniffing the content when there is none.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            Some(other) => Err(DsaError::config(format!(
                "unsupported config format '{other}' for {}",
                path.display()
            ))),
            None => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    fn validate(self) -> Result<Self> {
        if self.initial_capacity == 0 {
            return Err(DsaError::InvalidCapacity(0));
        }
        Ok(self)
    }
}
