use std::fmt;

/// A locale that spec values may carry translations for.
///
/// Declaration order is the last-resort lookup order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    ZhCn,
    ZhTw,
    EnUs,
}

/// Supported locales, in declaration order.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::ZhCn, Locale::ZhTw, Locale::EnUs];

impl Locale {
    /// Canonical code, exactly as it appears as a key in localized objects.
    pub fn code(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::EnUs => "en-US",
        }
    }

    /// Match a localized-object key. Keys are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LOCALES.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Trim arbitrary text. Absent input becomes the empty string.
pub fn normalize_text(s: Option<&str>) -> String {
    s.unwrap_or_default().trim().to_string()
}

/// Normalize a requested locale for table lookup: trimmed, lowercase.
pub fn normalize_locale_code(locale: &str) -> String {
    locale.trim().to_lowercase()
}

/// Ordered preference list for a requested locale.
///
/// Example:
/// - `zh-HK` -> `[zh-TW, zh-CN, en-US]`
/// - `en` -> `[en-US, zh-CN, zh-TW]`
/// - anything unrecognized -> `[zh-CN, zh-TW, en-US]`
pub fn locale_fallbacks(locale: &str) -> [Locale; 3] {
    match normalize_locale_code(locale).as_str() {
        "zh-tw" | "zh-hk" | "zh-mo" => [Locale::ZhTw, Locale::ZhCn, Locale::EnUs],
        "en" | "en-us" => [Locale::EnUs, Locale::ZhCn, Locale::ZhTw],
        _ => SUPPORTED_LOCALES,
    }
}
