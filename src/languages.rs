/// Human-readable language labels mapped to the translation service's codes.
///
/// This is the single source of truth for both dropdowns on the upload page
/// and for the outbound request parameters. Read-only, fixed at compile time.
pub const LANGUAGE_OPTIONS: [(&str, &str); 19] = [
    ("Afrikaans", "af"),
    ("Chinese (Literary)", "lzh"),
    ("Chinese Simplified", "zh-Hans"),
    ("Chinese Traditional", "zh-Hant"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Filipino", "fil"),
    ("French", "fr"),
    ("German", "de"),
    ("Greek", "el"),
    ("Hindi", "hi"),
    ("Indonesian", "id"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Malay (Latin)", "ms"),
    ("Russian", "ru"),
    ("Thai", "th"),
    ("Vietnamese", "vi"),
];

/// Pre-selected source language on the upload page.
pub const DEFAULT_SOURCE_LABEL: &str = "English";

const FALLBACK_SOURCE_CODE: &str = "en";
const FALLBACK_TARGET_CODE: &str = "te";

pub fn service_code(label: &str) -> Option<&'static str> {
    LANGUAGE_OPTIONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}

/// Source-language code for the outbound request. The fallback is defensive:
/// validation only admits labels from `LANGUAGE_OPTIONS`, so it fires only if
/// the enumeration and this table ever drift apart.
pub fn source_code(label: &str) -> &'static str {
    service_code(label).unwrap_or(FALLBACK_SOURCE_CODE)
}

/// Target-language code, same defensive fallback as [`source_code`].
pub fn target_code(label: &str) -> &'static str {
    service_code(label).unwrap_or(FALLBACK_TARGET_CODE)
}

pub fn labels() -> Vec<&'static str> {
    LANGUAGE_OPTIONS.iter().map(|(name, _)| *name).collect()
}
