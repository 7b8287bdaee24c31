//! fbmarketing CLI - Command-line interface for the Facebook Marketing client
//!
//! Provides commands for:
//! - OAuth URLs and token exchange
//! - Account and page information
//! - Page app subscriptions
//! - Lead generation forms and leads
//! - Viewing and validating configuration

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use fbmarketing_core::config::{Config, LoggingConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    account::AccountCommand, auth::AuthCommand, completions::CompletionsCommand,
    config::ConfigCommand, leads::LeadsCommand, subscriptions::SubscriptionsCommand,
};
use context::Context;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "fbmarketing",
    version,
    about = "Facebook Marketing Graph API client"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Access token to use instead of auth.access_token from the config
    #[arg(long, global = true, env = "FBMARKETING_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// OAuth URLs and token exchange
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Authenticated account and its pages
    #[command(subcommand)]
    Account(AccountCommand),
    /// Manage the app's page subscriptions
    #[command(subcommand)]
    Subscriptions(SubscriptionsCommand),
    /// Lead generation forms and leads
    #[command(subcommand)]
    Leads(LeadsCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must load; the default path may be absent
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut load_error = None;
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None if config_path.exists() => Config::load(&config_path).unwrap_or_else(|e| {
            load_error = Some(e);
            Config::default()
        }),
        None => Config::default(),
    };

    init_tracing(cli.verbose, &config.logging);

    if let Some(e) = load_error {
        warn!(
            config_path = %config_path.display(),
            error = %format!("{e:#}"),
            "Config file could not be loaded, using defaults"
        );
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let ctx = Context::new(config, config_path, cli.token, format);

    match cli.command {
        Commands::Auth(cmd) => cmd.execute(&ctx).await,
        Commands::Account(cmd) => cmd.execute(&ctx).await,
        Commands::Subscriptions(cmd) => cmd.execute(&ctx).await,
        Commands::Leads(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx).await,
        Commands::Completions(cmd) => cmd.execute(&ctx).await,
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
