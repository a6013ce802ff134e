//! Dairy ledger command line interface
//!
//! Usage:
//!   dairy init           - Create the database schema
//!   dairy start          - Start the API server
//!
//! The JWT signing secret is read from DAIRY_JWT_SECRET (at least 32
//! bytes); the database location from --db-url or DATABASE_URL.

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use dairy_api::{run_server, ApiConfig, JwtConfig};
use dairy_db::Database;

#[derive(Parser)]
#[command(name = "dairy")]
#[command(about = "Dairy ledger backend", version)]
struct Cli {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://dairy.db")]
    db_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init,

    /// Start the API server
    Start {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
        /// Disable the permissive CORS layer
        #[arg(long)]
        no_cors: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let database = Arc::new(Database::connect(&cli.db_url).await?);

    match cli.command {
        Commands::Init => {
            database.init_schema().await?;
            tracing::info!(db_url = %cli.db_url, "database schema initialized");
        }
        Commands::Start { host, port, no_cors } => {
            let jwt = JwtConfig::try_from_env("DAIRY_JWT_SECRET")?;
            let config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
            };

            run_server(config, database, jwt)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
