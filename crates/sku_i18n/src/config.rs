//! Formatter settings (`sku.toml`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SkuI18nError;

/// Settings shared by every call a [`crate::SkuFormatter`] makes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Requested display locale
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Label shown for the `DEFAULT` sku code
    #[serde(default)]
    pub default_label: Option<String>,
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            default_label: None,
        }
    }
}

impl FormatConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, SkuI18nError> {
        Ok(toml::from_str(src)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SkuI18nError> {
        let content = fs::read_to_string(path).map_err(|source| SkuI18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
