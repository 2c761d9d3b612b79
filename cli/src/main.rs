mod commands;
mod config;
mod setup;
mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use database::SqliteTaskStore;
use http_api::ApiServer;
use std::sync::Arc;
use telemetry::{init_telemetry, log_startup_info};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal to-do list manager")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    config: Option<String>,

    /// Database file or sqlite:// URL shared by all commands
    #[arg(short, long, env = "DATABASE_URL", global = true)]
    file: Option<String>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task
    Add {
        /// The task description
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// List tasks, open ones only unless --done is given
    List {
        /// Include tasks already done
        #[arg(long)]
        done: bool,
    },
    /// Mark a task as done
    Check {
        /// The task ID
        id: i64,
    },
    /// Remove a task
    Remove {
        /// The task ID
        id: i64,
    },
    /// Overwrite a task's description and done flag
    Edit {
        /// The task ID
        id: i64,
        /// The new description
        description: String,
        /// The new done flag (true or false)
        #[arg(action = clap::ArgAction::Set)]
        done: bool,
    },
    /// Show a single task
    Show {
        /// The task ID
        id: i64,
    },
    /// Run the REST API server
    Serve {
        /// Listen address override
        #[arg(long, env = "LISTEN_ADDR")]
        listen_addr: Option<String>,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => Config::from_file(config_file)?,
        None => Config::from_env()?,
    };

    // Apply CLI overrides
    if let Some(ref file) = cli.file {
        config.database.url = Some(file.clone());
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    if let Command::Serve {
        listen_addr: Some(ref listen_addr),
    } = cli.command
    {
        config.server.listen_addr = listen_addr.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli).context("Failed to load configuration")?;

    // Initialize telemetry/logging system
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Configuration validation failed");
        std::process::exit(1);
    }

    // Open the store once; every command gets it passed explicitly
    let store = setup::create_store(&config)
        .await
        .context("Failed to initialize task store")?;

    match cli.command {
        Command::Add { description } => commands::add(store.as_ref(), &description.join(" ")).await,
        Command::List { done } => commands::list(store.as_ref(), done).await,
        Command::Check { id } => commands::check(store.as_ref(), id).await,
        Command::Remove { id } => commands::remove(store.as_ref(), id).await,
        Command::Edit {
            id,
            description,
            done,
        } => commands::edit(store.as_ref(), id, &description, done).await,
        Command::Show { id } => commands::show(store.as_ref(), id).await,
        Command::Serve { .. } => serve(store, &config).await,
    }
}

/// Run the REST API server until a shutdown signal arrives
async fn serve(store: Arc<SqliteTaskStore>, config: &Config) -> Result<()> {
    log_startup_info(config);

    let server = ApiServer::new(store);
    let addr = config.server_address();

    // Setup graceful shutdown handling
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM handler");
        let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
            .expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT, initiating graceful shutdown");
            }
        }

        let _ = shutdown_tx.send(());
    });

    tokio::select! {
        result = server.serve(&addr) => {
            match result {
                Ok(()) => {
                    info!("REST API server shut down cleanly");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "REST API server error");
                    std::process::exit(3);
                }
            }
        }
        _ = shutdown_rx => {
            info!("Shutdown signal received, stopping server");
            Ok(())
        }
    }
}
