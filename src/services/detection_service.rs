use log::{debug, info, warn};
use std::sync::Arc;

use crate::models::detection_response::DetectionResponse;
use crate::services::{
    confidence_service, detect_language_service::LanguageDetector, language_names,
};

const MIN_TEXT_CHARS: usize = 3;

pub const EMPTY_TEXT: &str = "Please provide some text to analyze.";
pub const TEXT_TOO_SHORT: &str = "Text is too short. Please provide at least 3 characters.";

pub fn detection_failed(message: &str) -> String {
    format!(
        "Could not reliably detect the language. Error: {}",
        message
    )
}

#[derive(Clone)]
pub struct DetectionService {
    detector: Arc<dyn LanguageDetector + Send + Sync>,
}

impl DetectionService {
    pub fn new(detector: Arc<dyn LanguageDetector + Send + Sync>) -> DetectionService {
        DetectionService { detector }
    }

    pub fn detect(&self, text: &str) -> DetectionResponse {
        let text = text.trim();

        if text.is_empty() {
            debug!("Rejected empty text");
            return DetectionResponse::failed(EMPTY_TEXT);
        }

        let text_length = text.chars().count();
        if text_length < MIN_TEXT_CHARS {
            debug!("Rejected text of {} characters", text_length);
            return DetectionResponse::failed(TEXT_TOO_SHORT);
        }

        let detected_language = match self.detector.detect(text) {
            Ok(code) => code,
            Err(err) => {
                warn!("Language detection failed: {}", err);
                return DetectionResponse::failed(detection_failed(&err.to_string()));
            }
        };

        let language_name = language_names::resolve(&detected_language);
        let confidence_factors = confidence_service::annotate(text);

        info!(
            "Detected {} ({}) in {} characters",
            language_name, detected_language, text_length
        );

        DetectionResponse::detected(
            detected_language,
            language_name,
            confidence_factors,
            text_length,
        )
    }
}
