//! Binary entry point: environment bootstrap and the monitor loop.

use blob_event_monitor::error::Result;
use blob_event_monitor::{BlobMonitor, MonitorConfig};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    if let Err(err) = start().await {
        error!(error = %err, "Error starting monitoring");
        std::process::exit(1);
    }
}

async fn start() -> Result<()> {
    let config = MonitorConfig::from_env()?;
    BlobMonitor::new(config)?.run().await
}
