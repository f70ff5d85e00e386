//! recordctl CLI - parameterized CRUD against the `data` table
//!
//! With no subcommand, runs the fixed demonstration sequence
//! (read, create, update, delete) once and exits successfully even when
//! individual steps fail. Subcommands run a single operation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recordctl_store::{DatabaseConfig, PoolConfig, DEFAULT_DSN};
use tracing::debug;

mod commands;
mod tracing_setup;

use commands::{DemoArgs, RecordCommand};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recordctl",
    author,
    version,
    about = "Create, read, update and delete rows of the `data` table",
    long_about = "Runs parameterized CRUD statements against a pre-existing `data` table \
                  (id, key, value, create_time, update_time). Without a subcommand the \
                  demo sequence runs: read, create, update, delete."
)]
struct Cli {
    /// Connection string: user:password@tcp(host:port)/db, mysql://... or sqlite:...
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DSN, global = true, hide_env_values = true)]
    database_url: String,

    /// Maximum number of idle connections kept in the pool
    #[arg(long, env = "RECORDCTL_MAX_IDLE", default_value_t = PoolConfig::default().max_idle, global = true)]
    max_idle: u32,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print records as JSON (single-operation commands)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the read, create, update, delete sequence (default)
    Demo(DemoArgs),
    #[command(flatten)]
    Record(RecordCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let database: DatabaseConfig = cli
        .database_url
        .parse()
        .context("Failed to parse database URL")?;
    let pool_config = PoolConfig {
        max_idle: cli.max_idle,
    };

    let pool = recordctl_store::connect(&database, &pool_config)
        .await
        .with_context(|| format!("Failed to connect to {database}"))?;
    let store = pool.store();

    let result = match cli.command.unwrap_or(Commands::Demo(DemoArgs::default())) {
        Commands::Demo(args) => {
            let report = commands::run_demo(store.as_ref(), &args).await;
            debug!(?report, "demo report");
            Ok(())
        }
        Commands::Record(command) => commands::run_record(store.as_ref(), command, cli.json).await,
    };

    drop(store);
    pool.close().await;
    result
}
