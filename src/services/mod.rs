pub mod confidence_service;
pub mod detect_language_service;
pub mod detection_service;
pub mod language_names;
