/*
[INPUT]:  CLI arguments, optional YAML configuration file, HOUSEKEEPING_* environment
[OUTPUT]: Interactive dashboard (default) or a one-shot Task Service command
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or subcommands
*/

mod cli;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use housekeeping_adapter::{HousekeepingClient, TaskService, TaskStatus};
use housekeeping_dashboard::logging::{LOG_BUFFER_CAPACITY, LogBuffer, LogTarget, init_tracing};
use housekeeping_dashboard::{DashboardConfig, TaskDashboard};

#[derive(Parser, Debug)]
#[command(
    name = "housekeeping-dashboard",
    version,
    about = "Hotel housekeeping task dashboard"
)]
struct Cli {
    /// YAML configuration file
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Task Service base URL (overrides config)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    /// Access token sent when listing tasks
    #[arg(long = "token", value_name = "TOKEN", global = true)]
    token: Option<String>,
    /// Block task loading until a token is supplied
    #[arg(long = "require-token", global = true)]
    require_token: bool,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal dashboard (default)
    Tui,
    /// List all tasks
    List,
    /// Create a task
    Create {
        #[arg(long)]
        description: String,
        #[arg(long)]
        employee: String,
        #[arg(long, default_value_t = TaskStatus::Pending)]
        status: TaskStatus,
    },
    /// Change the status of a task
    Update {
        #[arg(long = "task-id")]
        task_id: String,
        #[arg(long)]
        status: TaskStatus,
    },
    /// Generate (or fetch) the automatic cleaning task for a room
    Clean {
        #[arg(long)]
        hotel: String,
        #[arg(long)]
        room: String,
        #[arg(long = "new-status")]
        new_status: Option<String>,
    },
    /// Validate and print the effective configuration
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = load_config(&args)?;
    let command = args.command.unwrap_or(Command::Tui);

    if let Command::CheckConfig = command {
        return cli::run_check_config(&config);
    }
    config.validate().context("invalid configuration")?;

    let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
    let target = match command {
        Command::Tui => LogTarget::Buffer(log_buffer.clone()),
        _ => LogTarget::Stderr,
    };
    let _log_guard = init_tracing(&config.log_level, target, config.log_dir.as_deref())?;

    info!(
        base_url = %config.base_url,
        require_token = config.require_token,
        "starting housekeeping-dashboard"
    );

    let client = HousekeepingClient::with_config_and_base_url(config.client_config(), &config.base_url)
        .context("create Task Service client")?;
    let service: Arc<dyn TaskService> = Arc::new(client);
    let dashboard = Arc::new(TaskDashboard::with_token(
        service,
        config.require_token,
        config.access_token(),
    ));

    match command {
        Command::Tui => tui::run_tui_with_log(dashboard, log_buffer).await,
        Command::List => cli::run_list(&dashboard).await,
        Command::Create {
            description,
            employee,
            status,
        } => cli::run_create(&dashboard, &description, &employee, status).await,
        Command::Update { task_id, status } => cli::run_update(&dashboard, &task_id, status).await,
        Command::Clean {
            hotel,
            room,
            new_status,
        } => cli::run_clean(&dashboard, &hotel, &room, new_status.as_deref()).await,
        Command::CheckConfig => Ok(()),
    }
}

/// Config file and environment, then command-line overrides
fn load_config(args: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(token) = &args.token {
        config.token = Some(token.clone());
    }
    if args.require_token {
        config.require_token = true;
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }
    Ok(config)
}
