//! ISO 15924 script codes.

use super::CodeKind;

/// A validated ISO 15924 script code, spelled in title case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso15924 {
    code: &'static str,
}

impl Iso15924 {
    pub const ARABIC: Iso15924 = Iso15924 { code: "Arab" };
    pub const CYRILLIC: Iso15924 = Iso15924 { code: "Cyrl" };
    pub const GREEK: Iso15924 = Iso15924 { code: "Grek" };
    pub const HAN: Iso15924 = Iso15924 { code: "Hani" };
    pub const HANGUL: Iso15924 = Iso15924 { code: "Hang" };
    pub const HEBREW: Iso15924 = Iso15924 { code: "Hebr" };
    pub const KATAKANA: Iso15924 = Iso15924 { code: "Kana" };
    pub const LATIN: Iso15924 = Iso15924 { code: "Latn" };
    pub const COMMON: Iso15924 = Iso15924 { code: "Zyyy" };
    pub const UNKNOWN: Iso15924 = Iso15924 { code: "Zzzz" };
}

registry_code!(Iso15924, CodeKind::Script, script);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeRegistry;

    #[test]
    fn test_constants_are_registered() {
        for constant in [
            Iso15924::ARABIC,
            Iso15924::CYRILLIC,
            Iso15924::GREEK,
            Iso15924::HAN,
            Iso15924::HANGUL,
            Iso15924::HEBREW,
            Iso15924::KATAKANA,
            Iso15924::LATIN,
            Iso15924::COMMON,
            Iso15924::UNKNOWN,
        ] {
            let registered = CodeRegistry::get().script(constant.code());
            assert_eq!(registered.map(|c| c.code), Some(constant.code()));
        }
    }

    #[test]
    fn test_from_code_keeps_title_case() {
        let script = Iso15924::from_code("CYRL").unwrap();
        assert_eq!(script, Iso15924::CYRILLIC);
        assert_eq!(script.to_string(), "Cyrl");
    }

    #[test]
    fn test_from_code_invalid() {
        let err = Iso15924::from_code("Latin").unwrap_err();
        assert_eq!(err.to_string(), "Unknown script code: 'Latin'");
    }

    #[test]
    fn test_name() {
        assert_eq!(Iso15924::HAN.name(), "Han");
        assert_eq!(Iso15924::COMMON.name(), "Common");
    }

    #[test]
    fn test_serde_wire_code() {
        assert_eq!(serde_json::to_string(&Iso15924::LATIN).unwrap(), "\"Latn\"");
        let parsed: Iso15924 = serde_json::from_str("\"arab\"").unwrap();
        assert_eq!(parsed, Iso15924::ARABIC);
    }
}
