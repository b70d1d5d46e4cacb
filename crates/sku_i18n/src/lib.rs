//! Localized SKU specification text
//!
//! Turns the `spec_values` of a SKU (per-locale text objects, arrays, plain
//! scalars, in any nesting) into one display string for a requested locale,
//! and reads the display code out of a SKU snapshot record.
//!
//! - Locales: `zh-CN`, `zh-TW`, `en-US`, each request mapped to a fixed
//!   three-step fallback chain ([`locale_fallbacks`]).
//! - Payloads are classified once into a [`SpecValue`]; formatting never
//!   fails and degrades to an empty string on shapes it can't use.
//!
//! ```rust
//! use serde_json::json;
//! use sku_i18n::{format_sku_spec_values, resolve_sku_code_from_snapshot, SkuCodeOptions};
//!
//! let spec = json!({ "color": { "zh-CN": "红色", "en-US": "Red" }, "size": "" });
//! assert_eq!(format_sku_spec_values(&spec, "en-US"), "color: Red");
//!
//! let opts = SkuCodeOptions::with_default_label("Standard");
//! assert_eq!(resolve_sku_code_from_snapshot(&json!({ "sku_code": "default" }), &opts), "Standard");
//! ```

mod config;
mod error;
mod format;
mod formatter;
mod locale;
mod snapshot;
mod value;

pub use config::FormatConfig;
pub use error::SkuI18nError;
pub use format::{
    format_sku_spec_values, format_spec_value, format_spec_values, is_localized_object,
    resolve_localized_text,
};
pub use formatter::SkuFormatter;
pub use locale::{
    locale_fallbacks, normalize_locale_code, normalize_text, Locale, SUPPORTED_LOCALES,
};
pub use snapshot::{
    resolve_sku_code_from_snapshot, resolve_sku_spec_from_snapshot, SkuCodeOptions, SkuSnapshot,
    DEFAULT_SKU_CODE,
};
pub use value::{LocalizedText, Scalar, SpecValue};
