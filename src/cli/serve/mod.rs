//! Serve command - runs the gateway

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::infrastructure::guard::RateLimiter;
use crate::infrastructure::logging;

/// Listener overrides
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port and PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the gateway server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    apply_args(&mut config, args);
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    spawn_rate_limit_cleanup(Arc::clone(&state.rate_limiter), &config);

    let app = crate::api::create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Server running on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn apply_args(config: &mut AppConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

/// Evict elapsed rate windows in the background
fn spawn_rate_limit_cleanup(rate_limiter: Arc<RateLimiter>, config: &AppConfig) {
    let mut interval = tokio::time::interval(config.rate_limit.cleanup_interval());

    tokio::spawn(async move {
        loop {
            interval.tick().await;
            let removed = rate_limiter.cleanup();
            if removed > 0 {
                debug!(removed, tracked = rate_limiter.tracked(), "Evicted rate windows");
            }
        }
    });
}
