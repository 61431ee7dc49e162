pub mod config;
pub mod detection_response;
