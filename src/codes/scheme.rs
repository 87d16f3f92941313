//! Transliteration schemes.

use super::CodeKind;

/// A validated transliteration scheme identifier.
///
/// When a request leaves the scheme unset, the service picks one based on
/// the source and target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransliterationScheme {
    code: &'static str,
}

impl TransliterationScheme {
    /// Keep the name in its native script.
    pub const NATIVE: TransliterationScheme = TransliterationScheme { code: "NATIVE" };
    pub const IC: TransliterationScheme = TransliterationScheme { code: "IC" };
    pub const BGN: TransliterationScheme = TransliterationScheme { code: "BGN" };
    pub const ISO: TransliterationScheme = TransliterationScheme { code: "ISO" };
    pub const HEPBURN: TransliterationScheme = TransliterationScheme { code: "HEPBURN" };
    pub const HANYU_PINYIN: TransliterationScheme = TransliterationScheme {
        code: "HANYU_PINYIN",
    };
    pub const HANYU_PINYIN_TONE_MARKS: TransliterationScheme = TransliterationScheme {
        code: "HANYU_PINYIN_TONE_MARKS",
    };
    pub const MCCUNE_REISCHAUER: TransliterationScheme = TransliterationScheme {
        code: "MCCUNE_REISCHAUER",
    };
    pub const REVISED_ROMANIZATION: TransliterationScheme = TransliterationScheme {
        code: "REVISED_ROMANIZATION",
    };
}

registry_code!(TransliterationScheme, CodeKind::Scheme, scheme);
