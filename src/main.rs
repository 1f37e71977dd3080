use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use travel_planner::{PlannerConfig, PlannerService, logging, web};

/// Trip planning API combining hourly weather forecasts with nearby tourist attractions
#[derive(Parser, Debug)]
#[command(name = "travel-planner", version, about)]
struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, env = "PLANNER_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PlannerConfig::load_from_path(&cli.config)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    logging::init(&config.logging)?;
    tracing::debug!("Loaded configuration: {:?}", config.server);

    let service = Arc::new(PlannerService::from_config(&config)?);
    web::run(service, &config.server).await
}
