use serde_json::Value;

use crate::config::FormatConfig;
use crate::format::format_spec_values;
use crate::snapshot::{SkuCodeOptions, SkuSnapshot};
use crate::value::SpecValue;

/// Formats snapshots for one locale and default label.
#[derive(Clone, Debug, Default)]
pub struct SkuFormatter {
    locale: String,
    code_options: SkuCodeOptions,
}

impl SkuFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            locale: config.locale,
            code_options: SkuCodeOptions {
                default_label: config.default_label,
            },
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Format a bare spec-values payload.
    pub fn format_spec_values(&self, spec_values: &Value) -> String {
        format_spec_values(&SpecValue::from(spec_values), &self.locale)
    }

    pub fn sku_code(&self, snapshot: &Value) -> String {
        SkuSnapshot::from_value(snapshot)
            .map(|s| s.display_code(&self.code_options))
            .unwrap_or_default()
    }

    pub fn sku_spec(&self, snapshot: &Value) -> String {
        SkuSnapshot::from_value(snapshot)
            .map(|s| s.spec_text(&self.locale))
            .unwrap_or_default()
    }

    /// One-line label for a snapshot: `CODE (spec)`, or whichever half exists.
    pub fn describe(&self, snapshot: &Value) -> String {
        let Some(snap) = SkuSnapshot::from_value(snapshot) else {
            return String::new();
        };
        let code = snap.display_code(&self.code_options);
        let spec = snap.spec_text(&self.locale);
        match (code.is_empty(), spec.is_empty()) {
            (false, false) => format!("{code} ({spec})"),
            (false, true) => code,
            (true, _) => spec,
        }
    }
}
