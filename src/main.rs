use std::sync::Arc;

use logging_service::config::Config;
use logging_service::server;
use logging_service::stdout_sink::StdoutSink;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let sink = Arc::new(StdoutSink::default());
    if let Err(e) = server::serve(&config, sink).await {
        error!("logging service failed: {e}");
        std::process::exit(1);
    }
}
