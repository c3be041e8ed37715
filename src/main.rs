mod analysis;
mod config;
mod error;
mod images;
mod server;
mod stt;

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use config::Config;
use server::AppState;
use stt::RemoteSttClient;

/// HTTP service for transcript sentiment, emotion, and text analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the speech-to-text server
    #[arg(long)]
    stt_server: Option<String>,

    /// Directory for processed image output
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Load config, then apply CLI overrides
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(),
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(url) = args.stt_server {
        config.stt_server_url = url;
    }
    if let Some(dir) = args.image_dir {
        config.image_output_dir = Some(dir);
    }

    info!("Analysis service starting...");
    info!("STT server: {}", config.stt_server_url);
    info!("Emotion match mode: {:?}", config.emotion_match_mode);

    let stt = RemoteSttClient::new(&config.stt_server_url, &config.stt_model)?;
    let image_output_dir = config.resolved_image_dir()?;

    let state = AppState {
        stt: Arc::new(stt),
        match_mode: config.emotion_match_mode,
        image_output_dir,
    };
    let app = server::build_router(state, config.max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received Ctrl+C, shutting down...");
}
