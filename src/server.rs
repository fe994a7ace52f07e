use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::record::LogRecord;
use crate::sink::LogSink;

pub const SUCCESS_BODY: &str = "Logged successfully\n";
pub const DECODE_ERROR_BODY: &str = "Could not decode JSON";
pub const METHOD_ERROR_BODY: &str = "Method not allowed";
pub const SINK_ERROR_BODY: &str = "Could not write log";

#[derive(Clone)]
struct AppState {
    sink: Arc<dyn LogSink>,
}

/// Build the ingest router around an injected sink.
///
/// The router is a plain local value; nothing is registered globally, so
/// multiple routers with independent sinks can coexist in one process.
pub fn router(sink: Arc<dyn LogSink>) -> Router {
    Router::new()
        .route("/log", post(submit_log).fallback(method_not_allowed))
        .with_state(AppState { sink })
}

/// `POST /log`: decode the body into a [`LogRecord`] and append it.
///
/// The body is decoded from raw bytes rather than through the `Json`
/// extractor so the response body stays a short fixed string and the
/// request is accepted regardless of its content type. Parse error
/// detail is neither echoed to the client nor logged.
async fn submit_log(State(state): State<AppState>, body: Bytes) -> Response {
    let record: LogRecord = match serde_json::from_slice(&body) {
        Ok(record) => record,
        Err(_) => return (StatusCode::BAD_REQUEST, DECODE_ERROR_BODY).into_response(),
    };

    if let Err(e) = state.sink.append(&record).await {
        error!("failed to append log record: {e}");
        return (StatusCode::INTERNAL_SERVER_ERROR, SINK_ERROR_BODY).into_response();
    }

    (StatusCode::OK, SUCCESS_BODY).into_response()
}

async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_ERROR_BODY).into_response()
}

/// Bind the configured port and serve the ingest router until shutdown.
///
/// A bind failure propagates to the caller; the binary treats it as
/// fatal. One startup line announcing the bound port is emitted.
pub async fn serve(config: &Config, sink: Arc<dyn LogSink>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("logging service running on port {}", config.port);
    axum::serve(listener, router(sink)).await?;
    Ok(())
}
