use anyhow::{Context, Result};
use clap::Parser;
use learnlab_server::{create_router, AppState, Config, YouTubeFetcher};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve YouTube transcripts as flattened, timestamped text
#[derive(Debug, Parser)]
#[command(name = "learnlab-server", version)]
struct Args {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/learnlab-server")]
    config: String,

    /// Override the bind address from config
    #[arg(long)]
    bind: Option<String>,

    /// Override the port from config
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Caption languages: {}", cfg.youtube.languages.join(", "));

    let fetcher = YouTubeFetcher::new(&cfg.youtube).context("Failed to build YouTube client")?;
    let app = create_router(AppState::new(Arc::new(fetcher)));

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
