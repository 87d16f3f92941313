//! Code registry: single source of truth for every code the service accepts.
//!
//! Language, script and transliteration scheme codes are kept in static
//! tables behind a `OnceLock` singleton, so lookups never allocate and the
//! typed wrappers can hold `&'static str` codes.

use std::sync::OnceLock;
use tracing::debug;

/// A known code and its English display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeConfig {
    /// Canonical wire spelling (e.g. "eng", "Latn", "IC")
    pub code: &'static str,

    /// English display name (e.g. "English", "Latin")
    pub name: &'static str,
}

/// Global code registry singleton.
pub struct CodeRegistry {
    languages: Vec<CodeConfig>,
    scripts: Vec<CodeConfig>,
    schemes: Vec<CodeConfig>,
}

static REGISTRY: OnceLock<CodeRegistry> = OnceLock::new();

impl CodeRegistry {
    /// Get the global registry, initialising it on first use.
    pub fn get() -> &'static CodeRegistry {
        REGISTRY.get_or_init(|| {
            let registry = CodeRegistry {
                languages: default_languages(),
                scripts: default_scripts(),
                schemes: default_schemes(),
            };
            debug!(
                languages = registry.languages.len(),
                scripts = registry.scripts.len(),
                schemes = registry.schemes.len(),
                "Initialized code registry"
            );
            registry
        })
    }

    /// Look up an ISO 639-3 language code, ignoring ASCII case.
    pub fn language(&self, code: &str) -> Option<&CodeConfig> {
        find(&self.languages, code)
    }

    /// Look up an ISO 15924 script code, ignoring ASCII case.
    pub fn script(&self, code: &str) -> Option<&CodeConfig> {
        find(&self.scripts, code)
    }

    /// Look up a transliteration scheme code, ignoring ASCII case.
    pub fn scheme(&self, code: &str) -> Option<&CodeConfig> {
        find(&self.schemes, code)
    }

    pub fn languages(&self) -> &[CodeConfig] {
        &self.languages
    }

    pub fn scripts(&self) -> &[CodeConfig] {
        &self.scripts
    }

    pub fn schemes(&self) -> &[CodeConfig] {
        &self.schemes
    }
}

fn find<'a>(table: &'a [CodeConfig], code: &str) -> Option<&'a CodeConfig> {
    table
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
}

const fn entry(code: &'static str, name: &'static str) -> CodeConfig {
    CodeConfig { code, name }
}

fn default_languages() -> Vec<CodeConfig> {
    vec![
        entry("afr", "Afrikaans"),
        entry("amh", "Amharic"),
        entry("ara", "Arabic"),
        entry("aze", "Azerbaijani"),
        entry("bel", "Belarusian"),
        entry("ben", "Bengali"),
        entry("bod", "Tibetan"),
        entry("bos", "Bosnian"),
        entry("bul", "Bulgarian"),
        entry("cat", "Catalan"),
        entry("ces", "Czech"),
        entry("cym", "Welsh"),
        entry("dan", "Danish"),
        entry("deu", "German"),
        entry("ell", "Greek"),
        entry("eng", "English"),
        entry("est", "Estonian"),
        entry("eus", "Basque"),
        entry("fas", "Persian"),
        entry("fin", "Finnish"),
        entry("fra", "French"),
        entry("gle", "Irish"),
        entry("glg", "Galician"),
        entry("guj", "Gujarati"),
        entry("hau", "Hausa"),
        entry("heb", "Hebrew"),
        entry("hin", "Hindi"),
        entry("hrv", "Croatian"),
        entry("hun", "Hungarian"),
        entry("hye", "Armenian"),
        entry("ind", "Indonesian"),
        entry("isl", "Icelandic"),
        entry("ita", "Italian"),
        entry("jpn", "Japanese"),
        entry("kan", "Kannada"),
        entry("kat", "Georgian"),
        entry("kaz", "Kazakh"),
        entry("khm", "Khmer"),
        entry("kir", "Kyrgyz"),
        entry("kor", "Korean"),
        entry("kur", "Kurdish"),
        entry("lao", "Lao"),
        entry("lav", "Latvian"),
        entry("lit", "Lithuanian"),
        entry("mal", "Malayalam"),
        entry("mar", "Marathi"),
        entry("mkd", "Macedonian"),
        entry("mon", "Mongolian"),
        entry("msa", "Malay"),
        entry("mya", "Burmese"),
        entry("nep", "Nepali"),
        entry("nld", "Dutch"),
        entry("nno", "Norwegian Nynorsk"),
        entry("nob", "Norwegian Bokmål"),
        entry("nor", "Norwegian"),
        entry("pan", "Punjabi"),
        entry("pol", "Polish"),
        entry("por", "Portuguese"),
        entry("prs", "Dari"),
        entry("pus", "Pashto"),
        entry("ron", "Romanian"),
        entry("rus", "Russian"),
        entry("sin", "Sinhala"),
        entry("slk", "Slovak"),
        entry("slv", "Slovenian"),
        entry("som", "Somali"),
        entry("spa", "Spanish"),
        entry("sqi", "Albanian"),
        entry("srp", "Serbian"),
        entry("swa", "Swahili"),
        entry("swe", "Swedish"),
        entry("tam", "Tamil"),
        entry("tel", "Telugu"),
        entry("tgk", "Tajik"),
        entry("tgl", "Tagalog"),
        entry("tha", "Thai"),
        entry("tuk", "Turkmen"),
        entry("tur", "Turkish"),
        entry("uig", "Uyghur"),
        entry("ukr", "Ukrainian"),
        entry("urd", "Urdu"),
        entry("uzb", "Uzbek"),
        entry("vie", "Vietnamese"),
        entry("yor", "Yoruba"),
        entry("zho", "Chinese"),
        entry("xxx", "Unknown"),
    ]
}

fn default_scripts() -> Vec<CodeConfig> {
    vec![
        entry("Arab", "Arabic"),
        entry("Cyrl", "Cyrillic"),
        entry("Deva", "Devanagari"),
        entry("Grek", "Greek"),
        entry("Hang", "Hangul"),
        entry("Hani", "Han"),
        entry("Hans", "Han (Simplified)"),
        entry("Hant", "Han (Traditional)"),
        entry("Hebr", "Hebrew"),
        entry("Hira", "Hiragana"),
        entry("Jpan", "Japanese"),
        entry("Kana", "Katakana"),
        entry("Kore", "Korean"),
        entry("Latn", "Latin"),
        entry("Thai", "Thai"),
        entry("Zyyy", "Common"),
        entry("Zzzz", "Unknown"),
    ]
}

fn default_schemes() -> Vec<CodeConfig> {
    vec![
        entry("NATIVE", "Native"),
        entry("IC", "Basis Intelligent Conversion"),
        entry("BGN", "BGN/PCGN"),
        entry("ISO", "ISO"),
        entry("ALA_LC", "ALA-LC"),
        entry("UN", "United Nations"),
        entry("HEPBURN", "Hepburn"),
        entry("HANYU_PINYIN", "Hanyu Pinyin"),
        entry("HANYU_PINYIN_TONE_MARKS", "Hanyu Pinyin with tone marks"),
        entry("MCCUNE_REISCHAUER", "McCune-Reischauer"),
        entry("REVISED_ROMANIZATION", "Revised Romanization"),
    ]
}
