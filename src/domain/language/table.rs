use serde::Serialize;

/// A target language: the name handed to the translation model and the
/// code understood by the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub code: &'static str,
}

impl LanguageEntry {
    const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }
}

impl std::fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Supported target languages, in presentation order
pub const LANGUAGES: [LanguageEntry; 20] = [
    LanguageEntry::new("Hindi", "hi"),
    LanguageEntry::new("Bengali", "bn"),
    LanguageEntry::new("Spanish", "es"),
    LanguageEntry::new("French", "fr"),
    LanguageEntry::new("German", "de"),
    LanguageEntry::new("Italian", "it"),
    LanguageEntry::new("Portuguese", "pt"),
    LanguageEntry::new("Russian", "ru"),
    LanguageEntry::new("Japanese", "ja"),
    LanguageEntry::new("Korean", "ko"),
    LanguageEntry::new("Chinese (Simplified)", "zh-CN"),
    LanguageEntry::new("Arabic", "ar"),
    LanguageEntry::new("Turkish", "tr"),
    LanguageEntry::new("Dutch", "nl"),
    LanguageEntry::new("Polish", "pl"),
    LanguageEntry::new("Swedish", "sv"),
    LanguageEntry::new("Thai", "th"),
    LanguageEntry::new("Vietnamese", "vi"),
    LanguageEntry::new("Indonesian", "id"),
    LanguageEntry::new("Greek", "el"),
];

/// Language preselected when a request does not name one
pub const DEFAULT_LANGUAGE: &LanguageEntry = &LANGUAGES[0];

/// Exact, case-sensitive lookup by display name
pub fn find_by_name(name: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.name == name)
}

pub fn find_by_code(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.code == code)
}
