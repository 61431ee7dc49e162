use log::debug;
use warp::{hyper::body::Bytes, Filter, Rejection, Reply};

use crate::models::detection_response::{DetectionRequest, DetectionResponse};
use crate::services::detection_service::{detection_failed, DetectionService};

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const NOT_JSON: &str = "Unsupported Media Type: request Content-Type was not 'application/json'";

pub fn routes(
    detection_service: DetectionService,
    max_body_bytes: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    index()
        .or(detect(detection_service, max_body_bytes))
        .with(warp::log("language_detector::api"))
}

fn index() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML))
}

fn detect(
    detection_service: DetectionService,
    max_body_bytes: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("detect")
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and(with_detection_service(detection_service))
        .map(handle_detect)
}

fn with_detection_service(
    detection_service: DetectionService,
) -> impl Filter<Extract = (DetectionService,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || detection_service.clone())
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

// Unreadable bodies get the same JSON failure shape as a failed detection.
fn handle_detect(
    content_type: Option<String>,
    body: Bytes,
    detection_service: DetectionService,
) -> impl Reply {
    if !content_type.as_deref().map_or(false, is_json) {
        debug!("Rejected detect request with content type {:?}", content_type);
        return warp::reply::json(&DetectionResponse::failed(detection_failed(NOT_JSON)));
    }

    let response = match serde_json::from_slice::<DetectionRequest>(&body) {
        Ok(request) => detection_service.detect(&request.text),
        Err(err) => {
            debug!("Unreadable detect request: {}", err);
            DetectionResponse::failed(detection_failed(&err.to_string()))
        }
    };

    warp::reply::json(&response)
}
