//! TAPD webhook receiver binary.
//!
//! Start the server with:
//! ```bash
//! TAPD_WEBHOOK_PORT=9000 cargo run -p tapd-webhook-server -- -v
//! ```

use std::sync::Arc;

use clap::Parser;
use tapd_webhook::Dispatcher;
use tapd_webhook_server::{serve, AppState, LogSubscriber, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Receives TAPD webhooks and logs every event
#[derive(Parser, Debug)]
#[command(name = "tapd-webhook-server")]
#[command(about = "Receive TAPD webhooks and dispatch them to subscribers")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "TAPD_WEBHOOK_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "TAPD_WEBHOOK_PORT", default_value = "8080")]
    port: u16,

    /// Route TAPD posts webhooks to
    #[arg(long, env = "TAPD_WEBHOOK_PATH", default_value = "/webhook")]
    path: String,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before clap reads the environment
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "tapd_webhook_server=info,tapd_webhook=info",
        1 => "tapd_webhook_server=debug,tapd_webhook=debug,tower_http=info",
        2 => "tapd_webhook_server=trace,tapd_webhook=trace,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::new(args.host, args.port).with_path(args.path);
    let dispatcher = Dispatcher::new().with_subscriber(Arc::new(LogSubscriber));
    tracing::debug!(subscriptions = dispatcher.len(), "dispatcher ready");

    serve(AppState::new(config, dispatcher)).await?;

    Ok(())
}
