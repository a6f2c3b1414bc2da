//! BrightPath API server binary.
//!
//! Serves the chat relay, activity catalogue, and coaching routes. Settings
//! come from flags, falling back to environment variables (a `.env` file is
//! loaded first when present).

use std::time::Duration;

use brightpath_core::relay::config::{DEFAULT_BASE_URL, UpstreamConfig};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "brightpath_server", about = "BrightPath API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Upstream bot identifier.
    #[arg(long, env = "BOT_ID", default_value = "")]
    bot_id: String,

    /// Upstream bearer token. Requests go out unauthenticated when unset.
    #[arg(long, env = "BP_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Upstream API root.
    #[arg(long, env = "UPSTREAM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    upstream_base_url: String,

    /// Per-candidate upstream timeout in seconds (at least 1).
    #[arg(
        long,
        env = "UPSTREAM_TIMEOUT_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    upstream_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "info,brightpath_api=debug,brightpath_core=debug",
                    )
                }),
        )
        .init();

    let args = Args::parse();

    let upstream = UpstreamConfig::new(args.upstream_base_url, args.bot_id, args.token)
        .with_timeout(Duration::from_secs(args.upstream_timeout_secs));

    info!(upstream = ?upstream, "starting brightpath_server");
    if !upstream.has_token() {
        warn!("no upstream token configured; relay requests will be unauthenticated");
    }

    let config = brightpath_api::config::ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        upstream,
    };

    let state = brightpath_api::AppState::new(config.clone())?;
    let app = brightpath_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    let ct = CancellationToken::new();
    tokio::spawn({
        let ct = ct.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, shutting down");
            }
            ct.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await?;

    Ok(())
}
