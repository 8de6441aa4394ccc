//! DLT Dashboard - command line client for the Super Lotto analysis backend.
//!
//! Usage: `dlt-dashboard [ROUTE]`, where ROUTE defaults to `/`.

use anyhow::Context;
use dlt_dashboard::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let log_dir = dlt_dashboard::config::log_dir().context("resolving log directory")?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "dlt-dashboard.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dlt_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default().context("loading configuration")?;

    let route = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    // Run the application
    let mut app = App::new(config).context("starting dashboard client")?;
    app.run(&route).await?;

    Ok(())
}
