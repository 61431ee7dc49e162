use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("af", "Afrikaans"),
        ("ar", "Arabic"),
        ("bg", "Bulgarian"),
        ("bn", "Bengali"),
        ("ca", "Catalan"),
        ("cs", "Czech"),
        ("cy", "Welsh"),
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("es", "Spanish"),
        ("et", "Estonian"),
        ("fa", "Persian"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("gu", "Gujarati"),
        ("he", "Hebrew"),
        ("hi", "Hindi"),
        ("hr", "Croatian"),
        ("hu", "Hungarian"),
        ("id", "Indonesian"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("kn", "Kannada"),
        ("ko", "Korean"),
        ("lt", "Lithuanian"),
        ("lv", "Latvian"),
        ("mk", "Macedonian"),
        ("ml", "Malayalam"),
        ("mr", "Marathi"),
        ("ne", "Nepali"),
        ("nl", "Dutch"),
        ("no", "Norwegian"),
        ("pa", "Punjabi"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("ro", "Romanian"),
        ("ru", "Russian"),
        ("sk", "Slovak"),
        ("sl", "Slovenian"),
        ("so", "Somali"),
        ("sq", "Albanian"),
        ("sv", "Swedish"),
        ("sw", "Swahili"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("th", "Thai"),
        ("tl", "Tagalog"),
        ("tr", "Turkish"),
        ("uk", "Ukrainian"),
        ("ur", "Urdu"),
        ("vi", "Vietnamese"),
        ("zh-cn", "Chinese (Simplified)"),
        ("zh-tw", "Chinese (Traditional)"),
    ]
    .iter()
    .cloned()
    .collect()
});

/// Display name for a language code, or the code uppercased if it is not known.
pub fn resolve(code: &str) -> String {
    match LANGUAGE_NAMES.get(code) {
        Some(name) => name.to_string(),
        None => code.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_known_code_to_its_table_entry() {
        for (code, name) in LANGUAGE_NAMES.iter() {
            assert_eq!(resolve(code), *name);
        }
        assert_eq!(LANGUAGE_NAMES.len(), 55);
    }

    #[test]
    fn resolves_common_codes() {
        assert_eq!(resolve("fr"), "French");
        assert_eq!(resolve("zh-cn"), "Chinese (Simplified)");
        assert_eq!(resolve("zh-tw"), "Chinese (Traditional)");
    }

    #[test]
    fn unknown_code_falls_back_to_uppercase() {
        assert_eq!(resolve("xx"), "XX");
        assert_eq!(resolve("epo"), "EPO");
        assert_eq!(resolve("zh-hk"), "ZH-HK");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve("FR"), "FR");
    }
}
