pub mod handlers;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use handlers::{emotion_detector, home};
use lambda_http::{run, tracing, Error};
use emotion_detection::env_keys::{AWS_LAMBDA_RUNTIME_API, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, SERVER_HOST, SERVER_PORT};
use emotion_detection::service::CommonService;
use std::env::set_var;


#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let service = CommonService::new();
    tracing::info!(endpoint = service.emotion.endpoint(), "emotion predict endpoint configured");
    let app = build_router(service);

    if std::env::var(AWS_LAMBDA_RUNTIME_API).is_ok() {
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        return run(app).await;
    }

    let host = std::env::var(SERVER_HOST).unwrap_or(DEFAULT_SERVER_HOST.to_owned());
    let port = parse_port(std::env::var(SERVER_PORT).ok().as_deref())?;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;
    tracing::info!("emotion detector listening on {}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(service: CommonService) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/emotionDetector", get(emotion_detector))
        .with_state(service)
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw {
        Some(port) => port.trim().parse().with_context(|| format!("invalid {}: {:?}", SERVER_PORT, port)),
        None => Ok(DEFAULT_SERVER_PORT),
    }
}
