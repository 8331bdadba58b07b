use phf::phf_map;

/// A subtitle language known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-2 bibliographic code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
}

impl Language {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// Compile-time language lookup table.
/// Keys cover ISO 639-1 and 639-2 codes plus English names, all lowercase.
static LANGUAGES: phf::Map<&'static str, Language> = phf_map! {
    "he" => Language::new("heb", "Hebrew"),
    "iw" => Language::new("heb", "Hebrew"),
    "heb" => Language::new("heb", "Hebrew"),
    "hebrew" => Language::new("heb", "Hebrew"),
    "en" => Language::new("eng", "English"),
    "eng" => Language::new("eng", "English"),
    "english" => Language::new("eng", "English"),
    "ar" => Language::new("ara", "Arabic"),
    "ara" => Language::new("ara", "Arabic"),
    "arabic" => Language::new("ara", "Arabic"),
    "ru" => Language::new("rus", "Russian"),
    "rus" => Language::new("rus", "Russian"),
    "russian" => Language::new("rus", "Russian"),
    "fr" => Language::new("fre", "French"),
    "fre" => Language::new("fre", "French"),
    "fra" => Language::new("fre", "French"),
    "french" => Language::new("fre", "French"),
    "de" => Language::new("ger", "German"),
    "ger" => Language::new("ger", "German"),
    "deu" => Language::new("ger", "German"),
    "german" => Language::new("ger", "German"),
    "es" => Language::new("spa", "Spanish"),
    "spa" => Language::new("spa", "Spanish"),
    "spanish" => Language::new("spa", "Spanish"),
    "it" => Language::new("ita", "Italian"),
    "ita" => Language::new("ita", "Italian"),
    "italian" => Language::new("ita", "Italian"),
    "pt" => Language::new("por", "Portuguese"),
    "por" => Language::new("por", "Portuguese"),
    "portuguese" => Language::new("por", "Portuguese"),
    "nl" => Language::new("dut", "Dutch"),
    "dut" => Language::new("dut", "Dutch"),
    "nld" => Language::new("dut", "Dutch"),
    "dutch" => Language::new("dut", "Dutch"),
    "pl" => Language::new("pol", "Polish"),
    "pol" => Language::new("pol", "Polish"),
    "polish" => Language::new("pol", "Polish"),
    "tr" => Language::new("tur", "Turkish"),
    "tur" => Language::new("tur", "Turkish"),
    "turkish" => Language::new("tur", "Turkish"),
    "el" => Language::new("gre", "Greek"),
    "gre" => Language::new("gre", "Greek"),
    "ell" => Language::new("gre", "Greek"),
    "greek" => Language::new("gre", "Greek"),
    "ro" => Language::new("rum", "Romanian"),
    "rum" => Language::new("rum", "Romanian"),
    "ron" => Language::new("rum", "Romanian"),
    "romanian" => Language::new("rum", "Romanian"),
    "hu" => Language::new("hun", "Hungarian"),
    "hun" => Language::new("hun", "Hungarian"),
    "hungarian" => Language::new("hun", "Hungarian"),
    "cs" => Language::new("cze", "Czech"),
    "cze" => Language::new("cze", "Czech"),
    "ces" => Language::new("cze", "Czech"),
    "czech" => Language::new("cze", "Czech"),
    "sv" => Language::new("swe", "Swedish"),
    "swe" => Language::new("swe", "Swedish"),
    "swedish" => Language::new("swe", "Swedish"),
    "no" => Language::new("nor", "Norwegian"),
    "nor" => Language::new("nor", "Norwegian"),
    "norwegian" => Language::new("nor", "Norwegian"),
    "da" => Language::new("dan", "Danish"),
    "dan" => Language::new("dan", "Danish"),
    "danish" => Language::new("dan", "Danish"),
    "fi" => Language::new("fin", "Finnish"),
    "fin" => Language::new("fin", "Finnish"),
    "finnish" => Language::new("fin", "Finnish"),
    "ja" => Language::new("jpn", "Japanese"),
    "jpn" => Language::new("jpn", "Japanese"),
    "japanese" => Language::new("jpn", "Japanese"),
    "ko" => Language::new("kor", "Korean"),
    "kor" => Language::new("kor", "Korean"),
    "korean" => Language::new("kor", "Korean"),
    "zh" => Language::new("chi", "Chinese"),
    "chi" => Language::new("chi", "Chinese"),
    "zho" => Language::new("chi", "Chinese"),
    "chinese" => Language::new("chi", "Chinese"),
    "uk" => Language::new("ukr", "Ukrainian"),
    "ukr" => Language::new("ukr", "Ukrainian"),
    "ukrainian" => Language::new("ukr", "Ukrainian"),
    "bg" => Language::new("bul", "Bulgarian"),
    "bul" => Language::new("bul", "Bulgarian"),
    "bulgarian" => Language::new("bul", "Bulgarian"),
    "fa" => Language::new("per", "Persian"),
    "per" => Language::new("per", "Persian"),
    "fas" => Language::new("per", "Persian"),
    "persian" => Language::new("per", "Persian"),
    "hi" => Language::new("hin", "Hindi"),
    "hin" => Language::new("hin", "Hindi"),
    "hindi" => Language::new("hin", "Hindi"),
    "th" => Language::new("tha", "Thai"),
    "tha" => Language::new("tha", "Thai"),
    "thai" => Language::new("tha", "Thai"),
    "vi" => Language::new("vie", "Vietnamese"),
    "vie" => Language::new("vie", "Vietnamese"),
    "vietnamese" => Language::new("vie", "Vietnamese"),
    "id" => Language::new("ind", "Indonesian"),
    "ind" => Language::new("ind", "Indonesian"),
    "indonesian" => Language::new("ind", "Indonesian"),
};

/// Resolves any known alias (two-letter code, three-letter code, English
/// name) to its table entry.
pub fn lookup(tag: &str) -> Option<Language> {
    LANGUAGES.get(tag.to_lowercase().as_str()).copied()
}

/// ISO 639-2 code for a language tag, if known.
pub fn iso639_2(tag: &str) -> Option<&'static str> {
    lookup(tag).map(|language| language.code)
}

/// English display name for a language tag, if known.
pub fn english_name(tag: &str) -> Option<&'static str> {
    lookup(tag).map(|language| language.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_any_alias() {
        assert_eq!(iso639_2("he"), Some("heb"));
        assert_eq!(iso639_2("heb"), Some("heb"));
        assert_eq!(iso639_2("Hebrew"), Some("heb"));
        assert_eq!(iso639_2("iw"), Some("heb"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(iso639_2("EN"), Some("eng"));
        assert_eq!(english_name("ENGLISH"), Some("English"));
    }

    #[test]
    fn test_terminology_code_maps_to_bibliographic() {
        assert_eq!(iso639_2("deu"), Some("ger"));
        assert_eq!(iso639_2("fra"), Some("fre"));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(lookup("klingon"), None);
        assert_eq!(iso639_2(""), None);
    }

    #[test]
    fn test_english_name() {
        assert_eq!(english_name("he"), Some("Hebrew"));
        assert_eq!(english_name("jpn"), Some("Japanese"));
    }
}
