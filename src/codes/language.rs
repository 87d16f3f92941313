//! Language codes (ISO 639-3 on the wire).

use super::CodeKind;

/// A validated language code.
///
/// Only codes present in the registry can be constructed, either through
/// [`LanguageCode::from_code`] or the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode {
    /// ISO 639-3 code (e.g. "eng", "deu")
    code: &'static str,
}

impl LanguageCode {
    pub const ARABIC: LanguageCode = LanguageCode { code: "ara" };
    pub const CHINESE: LanguageCode = LanguageCode { code: "zho" };
    pub const DUTCH: LanguageCode = LanguageCode { code: "nld" };
    pub const ENGLISH: LanguageCode = LanguageCode { code: "eng" };
    pub const FRENCH: LanguageCode = LanguageCode { code: "fra" };
    pub const GERMAN: LanguageCode = LanguageCode { code: "deu" };
    pub const JAPANESE: LanguageCode = LanguageCode { code: "jpn" };
    pub const KOREAN: LanguageCode = LanguageCode { code: "kor" };
    pub const POLISH: LanguageCode = LanguageCode { code: "pol" };
    pub const RUSSIAN: LanguageCode = LanguageCode { code: "rus" };
    pub const SPANISH: LanguageCode = LanguageCode { code: "spa" };

    /// Placeholder for a language the caller cannot name.
    pub const UNKNOWN: LanguageCode = LanguageCode { code: "xxx" };
}

registry_code!(LanguageCode, CodeKind::Language, language);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{CodeError, CodeRegistry};

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_are_registered() {
        for constant in [
            LanguageCode::ARABIC,
            LanguageCode::CHINESE,
            LanguageCode::DUTCH,
            LanguageCode::ENGLISH,
            LanguageCode::FRENCH,
            LanguageCode::GERMAN,
            LanguageCode::JAPANESE,
            LanguageCode::KOREAN,
            LanguageCode::POLISH,
            LanguageCode::RUSSIAN,
            LanguageCode::SPANISH,
            LanguageCode::UNKNOWN,
        ] {
            let registered = CodeRegistry::get().language(constant.code());
            assert_eq!(registered.map(|c| c.code), Some(constant.code()));
        }
    }

    #[test]
    fn test_english_constant() {
        assert_eq!(LanguageCode::ENGLISH.code(), "eng");
        assert_eq!(LanguageCode::ENGLISH.name(), "English");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_german() {
        let language = LanguageCode::from_code("deu").expect("Should succeed");
        assert_eq!(language, LanguageCode::GERMAN);
        assert_eq!(language.name(), "German");
    }

    #[test]
    fn test_from_code_normalizes_case() {
        let language = LanguageCode::from_code("RuS").expect("Should succeed");
        assert_eq!(language.code(), "rus");
    }

    #[test]
    fn test_from_code_wider_vocabulary() {
        for (code, name) in [
            ("nld", "Dutch"),
            ("pol", "Polish"),
            ("swe", "Swedish"),
            ("ind", "Indonesian"),
            ("ben", "Bengali"),
            ("msa", "Malay"),
            ("tgl", "Tagalog"),
        ] {
            let language = LanguageCode::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
            assert_eq!(language.name(), name);

            let json = serde_json::to_string(&language).unwrap();
            let parsed: LanguageCode = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = LanguageCode::from_code("en");
        assert_eq!(
            result,
            Err(CodeError::Unknown {
                kind: CodeKind::Language,
                code: "en".to_string(),
            })
        );
    }

    #[test]
    fn test_from_code_empty() {
        assert!(LanguageCode::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let language: LanguageCode = "spa".parse().unwrap();
        assert_eq!(language, LanguageCode::SPANISH);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_wire_code() {
        assert_eq!(LanguageCode::JAPANESE.to_string(), "jpn");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&LanguageCode::ARABIC).unwrap();
        assert_eq!(json, "\"ara\"");
    }

    #[test]
    fn test_deserialize_unknown_fails() {
        let result: Result<LanguageCode, _> = serde_json::from_str("\"qqq\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown language code: 'qqq'"));
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        let result: Result<LanguageCode, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
