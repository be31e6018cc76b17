//! Services booking API server.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_api_lib::config::ServerConfig;

#[derive(Parser)]
#[command(name = "booking-api")]
#[command(about = "Services booking API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
        /// Keep data in process memory instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::debug!(?config, "Loaded configuration");
            booking_api_lib::run_server(config, in_memory).await?;
        }
    }

    Ok(())
}
