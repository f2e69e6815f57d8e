//! FlexJet CLI - sign in and view booked flights.

mod app;
mod commands;
mod output;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use flexjet_config_and_utils::{init_logging, Config, Paths};
use tracing::debug;

/// FlexJet CLI - manage your session and list your flights.
#[derive(Parser)]
#[command(name = "flexjet")]
#[command(about = "FlexJet CLI for authentication and flight lookup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); defaults to the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with username and password
    Login,

    /// Sign out and remove the stored token
    Logout,

    /// Check authentication status
    Status,

    /// List your booked flights
    Flights,

    /// Show the config file, optionally changing settings in it
    Config {
        /// Base URL of the FlexJet API
        #[arg(long)]
        api_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

async fn run(cli: &Cli) -> Result<()> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)
        .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging("cli", log_level);
    debug!(api_base_url = %config.api_base_url, "Configuration loaded");

    match &cli.command {
        Commands::Login => commands::login(&App::new(&config).await?, &cli.format).await,
        Commands::Logout => commands::logout(&App::new(&config).await?, &cli.format).await,
        Commands::Status => {
            let app = App::new(&config).await?;
            commands::status(&app, &config.api_base_url, &cli.format).await
        }
        Commands::Flights => commands::flights(&App::new(&config).await?, &cli.format).await,
        Commands::Config {
            api_url,
            timeout_secs,
        } => {
            let update = commands::ConfigUpdate {
                api_url: api_url.clone(),
                timeout_secs: *timeout_secs,
            };
            commands::config(&paths, &update, &cli.format)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        output::print_error(&format!("{:#}", e), &cli.format);
        std::process::exit(1);
    }
}
