use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use internship_pay_filter::api::{AppState, create_router};
use internship_pay_filter::config::ConfigLoader;
use internship_pay_filter::engine::Engine;

/// Serve the internship pay filter API.
#[derive(Debug, Parser)]
#[command(name = "internship-pay-filter", version, about)]
struct Args {
    /// Directory containing settings.yaml.
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    let reference = config.load_reference_table();
    let engine = Engine::from_settings(config.settings(), reference);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!(
        address = %args.bind,
        reference_entries = engine.reference().len(),
        "Listening"
    );

    axum::serve(listener, create_router(AppState::new(engine)))
        .await
        .context("server error")?;

    Ok(())
}
