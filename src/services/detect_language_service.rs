use anyhow::{anyhow, Error};
use log::debug;
use whatlang::Lang;

pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Result<String, Error>;
}

/// Trigram detector backed by whatlang. Deterministic for a given input.
#[derive(Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> WhatlangDetector {
        WhatlangDetector
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, Error> {
        let info = whatlang::detect(text).ok_or_else(|| anyhow!("No features in text."))?;

        debug!(
            "whatlang detected {} (reliable: {}, confidence: {:.2})",
            info.lang().code(),
            info.is_reliable(),
            info.confidence()
        );

        Ok(language_code(info.lang()).to_string())
    }
}

/// Maps whatlang's ISO 639-3 languages onto the codes used by the name table.
/// Anything without a counterpart keeps its three-letter code.
fn language_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Afr => "af",
        Lang::Ara => "ar",
        Lang::Bul => "bg",
        Lang::Ben => "bn",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Est => "et",
        Lang::Pes => "fa",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kor => "ko",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Mkd => "mk",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "no",
        Lang::Pan => "pa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tha => "th",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Vie => "vi",
        // whatlang only knows Mandarin, written in simplified characters
        Lang::Cmn => "zh-cn",
        // Tagalog by code, the variant is missing from older whatlang releases
        l => match l.code() {
            "tgl" => "tl",
            code => code,
        },
    }
}
