//! Typed view over untyped spec-values payloads.
//!
//! Payloads arrive as arbitrary JSON. They are classified once, here, into a
//! [`SpecValue`]; the formatting code only ever matches on the variants.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};

use crate::error::SkuI18nError;
use crate::locale::Locale;

/// A leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Number(Number),
    Bool(bool),
}

impl Scalar {
    /// Display text of the scalar, trimmed.
    pub fn text(&self) -> String {
        match self {
            Self::Str(s) => s.trim().to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_text(n),
        }
    }

    /// Leaf of a JSON value; `None` for null, arrays and objects.
    pub fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }
}

/// Number text the way a browser prints it: `2.0` -> `2`, `1e21` -> `1e+21`,
/// `1e-7` -> `1e-7`, everything in between in plain decimal.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{f:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    if f.fract() == 0.0 {
        return format!("{f:.0}");
    }
    f.to_string()
}

/// Integral floats that fit an `i64` (`2.0`), which serialize without a fraction.
fn integral_f64(n: &Number) -> Option<i64> {
    if n.is_i64() || n.is_u64() {
        return None;
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => Self::Number(n),
            // NaN and infinities have no JSON number form.
            None => Self::Str(v.to_string()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Per-locale text: a mapping keyed only by supported locale codes.
///
/// Never empty; entries keep their input order.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalizedText {
    entries: Vec<(Locale, SpecValue)>,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> Option<&SpecValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Locale, &SpecValue)> {
        self.entries.iter().map(|(l, v)| (*l, v))
    }
}

/// A classified spec value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SpecValue {
    #[default]
    Null,
    Scalar(Scalar),
    Sequence(Vec<SpecValue>),
    Localized(LocalizedText),
    Mapping(IndexMap<String, SpecValue>),
}

impl SpecValue {
    /// Parse JSON text and classify it.
    pub fn from_json_str(src: &str) -> Result<Self, SkuI18nError> {
        let raw: Value = serde_json::from_str(src)?;
        Ok(Self::from(raw))
    }

    pub fn is_localized(&self) -> bool {
        matches!(self, Self::Localized(_))
    }

    /// True for anything that was a JSON object, localized or not.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Localized(_) | Self::Mapping(_))
    }

    /// Look up a field of an object value.
    pub fn field(&self, key: &str) -> Option<&SpecValue> {
        match self {
            Self::Mapping(map) => map.get(key),
            Self::Localized(text) => Locale::from_code(key).and_then(|l| text.get(l)),
            _ => None,
        }
    }
}

impl From<&Value> for SpecValue {
    fn from(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::Null,
            Value::Array(items) => Self::Sequence(items.iter().map(Self::from).collect()),
            Value::Object(map) => {
                let localized =
                    !map.is_empty() && map.keys().all(|k| Locale::from_code(k).is_some());
                if localized {
                    let entries = map
                        .iter()
                        .filter_map(|(k, v)| Locale::from_code(k).map(|l| (l, Self::from(v))))
                        .collect();
                    Self::Localized(LocalizedText { entries })
                } else {
                    Self::Mapping(map.iter().map(|(k, v)| (k.clone(), Self::from(v))).collect())
                }
            }
            leaf => Scalar::from_json(leaf).map(Self::Scalar).unwrap_or_default(),
        }
    }
}

impl From<Value> for SpecValue {
    fn from(raw: Value) -> Self {
        Self::from(&raw)
    }
}

impl From<Scalar> for SpecValue {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Number(n) => match integral_f64(n) {
                Some(i) => serializer.serialize_i64(i),
                None => n.serialize(serializer),
            },
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl Serialize for SpecValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Scalar(s) => s.serialize(serializer),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Localized(text) => {
                let mut map = serializer.serialize_map(Some(text.entries.len()))?;
                for (locale, value) in &text.entries {
                    map.serialize_entry(locale.code(), value)?;
                }
                map.end()
            }
            Self::Mapping(fields) => serializer.collect_map(fields),
        }
    }
}
