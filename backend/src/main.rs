//! Backend entry-point: wires the catalog REST endpoints and health probes.

mod server;

use actix_web::web;
use clap::Parser;
use std::net::SocketAddr;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::ServerConfig;

/// Command line options for the catalog server.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "In-memory book catalog service")]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Start with an empty catalog instead of the reference seed records.
    #[arg(long)]
    no_seed: bool,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let mut config = ServerConfig::new(cli.bind);
    if cli.no_seed {
        config = config.without_seed();
    }

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    server.await
}
