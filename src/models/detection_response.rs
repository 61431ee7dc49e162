use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetectionResponse {
    Detected(DetectedLanguage),
    Failed(DetectionFailure),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedLanguage {
    pub success: bool,
    pub detected_language: String,
    pub language_name: String,
    pub confidence_factors: Vec<String>,
    pub text_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionFailure {
    pub success: bool,
    pub error: String,
}

impl DetectionResponse {
    pub fn detected(
        detected_language: String,
        language_name: String,
        confidence_factors: Vec<String>,
        text_length: usize,
    ) -> DetectionResponse {
        DetectionResponse::Detected(DetectedLanguage {
            success: true,
            detected_language,
            language_name,
            confidence_factors,
            text_length,
        })
    }

    pub fn failed(error: impl Into<String>) -> DetectionResponse {
        DetectionResponse::Failed(DetectionFailure {
            success: false,
            error: error.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detected_serializes_flat() {
        let response = DetectionResponse::detected(
            "fr".to_string(),
            "French".to_string(),
            vec![],
            42,
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "detected_language": "fr",
                "language_name": "French",
                "confidence_factors": [],
                "text_length": 42
            })
        );
    }

    #[test]
    fn failure_only_carries_error() {
        let response = DetectionResponse::failed("nope");

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": "nope" })
        );
    }

    #[test]
    fn missing_text_field_reads_as_empty() {
        let request: DetectionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
    }
}
