use anyhow::anyhow;
use log::{info, LevelFilter};
use models::config::Config;
use services::detect_language_service::WhatlangDetector;
use services::detection_service::DetectionService;
use simple_logger::SimpleLogger;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

mod api;
mod models;
mod services;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    let level = config
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level: {}", config.log_level))?;
    SimpleLogger::new().with_level(level).init()?;

    let host = config.host.parse::<IpAddr>()?;
    let addr = SocketAddr::new(host, config.port);

    let detection_service = DetectionService::new(Arc::new(WhatlangDetector::new()));
    let routes = api::routes(detection_service, config.max_body_bytes);

    info!("Start language detector on http://{}", addr);

    warp::serve(routes).run(addr).await;

    Ok(())
}
