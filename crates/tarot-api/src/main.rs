//! HTTP server for tarot readings.

use std::process;

use clap::Parser;
use tarot_api::{ServerConfig, router, telemetry};

#[derive(Parser)]
#[command(name = "tarot-api", about = "Tarot Reader JSON API server", version)]
struct Cli {
    /// Host to bind (overrides TAROT_API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides TAROT_API_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    fn config(self) -> ServerConfig {
        let mut config = ServerConfig::from_env();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing_from_env();
    let config = Cli::parse().config();

    if let Err(e) = serve(&config).await {
        tracing::error!(error = %e, "server stopped");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "tarot-api listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "no ctrl-c handler; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
