//! Readers for SKU snapshot records (`{ "sku_code": ..., "spec_values": ... }`).

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::format::format_spec_values;
use crate::locale::normalize_text;
use crate::value::{Scalar, SpecValue};

/// `sku_code` value that stands for "the product's only variant".
pub const DEFAULT_SKU_CODE: &str = "DEFAULT";

/// Options for [`resolve_sku_code_from_snapshot`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SkuCodeOptions {
    /// Shown instead of the `DEFAULT` sentinel code.
    #[serde(default)]
    pub default_label: Option<String>,
}

impl SkuCodeOptions {
    pub fn with_default_label(label: impl Into<String>) -> Self {
        Self {
            default_label: Some(label.into()),
        }
    }
}

/// The parts of a snapshot record the readers care about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkuSnapshot {
    /// Trimmed `sku_code`; empty when missing or not a scalar.
    pub sku_code: String,
    pub spec_values: SpecValue,
}

impl SkuSnapshot {
    /// Classify a record. Returns `None` unless `raw` is a JSON object.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let row = raw.as_object()?;
        let sku_code = row
            .get("sku_code")
            .and_then(Scalar::from_json)
            .map(|code| code.text())
            .unwrap_or_default();
        let spec_values = row
            .get("spec_values")
            .map(SpecValue::from)
            .unwrap_or_default();
        Some(Self {
            sku_code,
            spec_values,
        })
    }

    /// Display code: the `sku_code`, or the default label for `DEFAULT`.
    pub fn display_code(&self, options: &SkuCodeOptions) -> String {
        if self.sku_code.is_empty() {
            return String::new();
        }
        if self.sku_code.eq_ignore_ascii_case(DEFAULT_SKU_CODE) {
            debug!(sku_code = %self.sku_code, "substituting default label for sentinel sku code");
            return normalize_text(options.default_label.as_deref());
        }
        self.sku_code.clone()
    }

    /// Formatted `spec_values` for `locale`.
    pub fn spec_text(&self, locale: &str) -> String {
        format_spec_values(&self.spec_values, locale)
    }
}

/// Display code of an untyped snapshot record. Non-objects yield `""`.
pub fn resolve_sku_code_from_snapshot(snapshot: &Value, options: &SkuCodeOptions) -> String {
    SkuSnapshot::from_value(snapshot)
        .map(|s| s.display_code(options))
        .unwrap_or_default()
}

/// Formatted spec text of an untyped snapshot record. Non-objects yield `""`.
pub fn resolve_sku_spec_from_snapshot(snapshot: &Value, locale: &str) -> String {
    SkuSnapshot::from_value(snapshot)
        .map(|s| s.spec_text(locale))
        .unwrap_or_default()
}
