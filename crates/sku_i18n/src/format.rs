use serde_json::Value;
use tracing::{trace, warn};

use crate::locale::{locale_fallbacks, Locale, SUPPORTED_LOCALES};
use crate::value::{LocalizedText, SpecValue};

const SEQUENCE_SEPARATOR: &str = ", ";
const ENTRY_SEPARATOR: &str = " / ";

/// True if `value` is an object keyed only (and at least once) by supported locale codes.
pub fn is_localized_object(value: &SpecValue) -> bool {
    value.is_localized()
}

/// Pick the best translation of a localized value for `locale`.
///
/// Returns an empty string for anything that is not a localized object.
pub fn resolve_localized_text(value: &SpecValue, locale: &str) -> String {
    match value {
        SpecValue::Localized(text) => resolve_text(text, locale),
        _ => String::new(),
    }
}

fn resolve_text(text: &LocalizedText, locale: &str) -> String {
    for code in locale_fallbacks(locale) {
        let s = field_text(text, code, locale);
        if !s.is_empty() {
            return s;
        }
    }

    // Never lose a translation the chain didn't reach.
    for code in SUPPORTED_LOCALES {
        let s = field_text(text, code, locale);
        if !s.is_empty() {
            trace!(locale = %locale, picked = %code, "localized text resolved outside the fallback chain");
            return s;
        }
    }

    String::new()
}

/// Text of one translation; nested arrays and objects are formatted recursively.
fn field_text(text: &LocalizedText, code: Locale, locale: &str) -> String {
    match text.get(code) {
        None | Some(SpecValue::Null) => String::new(),
        Some(SpecValue::Scalar(s)) => s.text(),
        Some(nested) => format_spec_value(nested, locale),
    }
}

/// Render any spec value as display text.
///
/// - sequences: non-empty items joined with `", "`
/// - localized objects: best translation for `locale`
/// - other objects: compact JSON
/// - scalars: trimmed text
pub fn format_spec_value(value: &SpecValue, locale: &str) -> String {
    match value {
        SpecValue::Sequence(items) => items
            .iter()
            .map(|item| format_spec_value(item, locale))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(SEQUENCE_SEPARATOR),
        SpecValue::Null => String::new(),
        SpecValue::Localized(text) => resolve_text(text, locale),
        SpecValue::Mapping(_) => match serde_json::to_string(value) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "failed to serialize spec value");
                String::new()
            }
        },
        SpecValue::Scalar(s) => s.text(),
    }
}

/// Render a whole spec-values object as `key: value / key: value`.
///
/// A localized object is rendered as a single translation without a key.
/// Entries whose value renders empty are dropped; a blank key renders the
/// value alone. Anything that is not an object renders empty.
pub fn format_spec_values(spec_values: &SpecValue, locale: &str) -> String {
    let fields = match spec_values {
        SpecValue::Localized(text) => return resolve_text(text, locale),
        SpecValue::Mapping(fields) => fields,
        _ => return String::new(),
    };

    fields
        .iter()
        .filter_map(|(key, value)| {
            let value_text = format_spec_value(value, locale);
            if value_text.is_empty() {
                return None;
            }
            let key = key.trim();
            if key.is_empty() {
                Some(value_text)
            } else {
                Some(format!("{key}: {value_text}"))
            }
        })
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// [`format_spec_values`] over an untyped JSON payload.
pub fn format_sku_spec_values(spec_values: &Value, locale: &str) -> String {
    format_spec_values(&SpecValue::from(spec_values), locale)
}
