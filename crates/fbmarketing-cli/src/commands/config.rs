//! Config command - View and manage the client configuration
//!
//! Provides the `fbmarketing config` CLI command which:
//! 1. Shows the current configuration with secrets redacted
//! 2. Sets individual configuration values via dot-notation keys
//! 3. Validates the configuration file and reports errors
//! 4. Prints the configuration file path

use anyhow::{Context as _, Result};
use clap::Subcommand;
use fbmarketing_core::config::Config;
use tracing::info;

use crate::context::Context;

const REDACTED: &str = "********";

const SUPPORTED_KEYS: &[(&str, &str)] = &[
    ("app.app_id", "Facebook application ID"),
    ("app.app_secret", "Facebook application secret"),
    ("app.api_version", "Graph API version, e.g. v19.0"),
    ("auth.access_token", "Default user access token"),
    ("http.timeout_secs", "Request timeout in seconds"),
    ("logging.level", "trace|debug|info|warn|error"),
    ("logging.json", "true|false"),
];

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration (secrets redacted)
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "app.api_version")
        key: String,
        /// New value ("none" or "" clears optional values)
        value: String,
    },
    /// Validate configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(ctx),
            ConfigCommand::Set { key, value } => self.execute_set(ctx, key, value),
            ConfigCommand::Validate => self.execute_validate(ctx),
            ConfigCommand::Path => {
                if ctx.is_json() {
                    ctx.formatter().print_json(&serde_json::json!({
                        "config_path": ctx.config_path.display().to_string(),
                        "exists": ctx.config_path.exists(),
                    }));
                } else {
                    println!("{}", ctx.config_path.display());
                }
                Ok(())
            }
        }
    }

    fn execute_show(&self, ctx: &Context) -> Result<()> {
        let formatter = ctx.formatter();
        let config = redacted(&ctx.config);

        info!(config_path = %ctx.config_path.display(), "Showing configuration");

        if ctx.is_json() {
            let json = serde_json::to_value(&config)
                .context("Failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", ctx.config_path.display()));
            formatter.info("");

            let yaml = serde_yaml::to_string(&config)
                .context("Failed to serialize configuration to YAML")?;
            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    fn execute_set(&self, ctx: &Context, key: &str, value: &str) -> Result<()> {
        let formatter = ctx.formatter();
        let config_path = &ctx.config_path;
        let mut config = if config_path.exists() {
            Config::load(config_path).with_context(|| {
                format!(
                    "Refusing to overwrite {}: it could not be loaded",
                    config_path.display()
                )
            })?
        } else {
            ctx.config.clone()
        };

        info!(key = %key, "Setting configuration value");

        if let Err(e) = apply_config_value(&mut config, key, value) {
            if ctx.is_json() {
                formatter.print_json(&serde_json::json!({
                    "success": false,
                    "key": key,
                    "error": e.to_string(),
                }));
            } else {
                formatter.error(&format!("Failed to set '{}': {}", key, e));
                formatter.info("");
                formatter.info("Supported keys:");
                for (name, help) in SUPPORTED_KEYS {
                    formatter.info(&format!("  {name:<20} - {help}"));
                }
            }
            return Ok(());
        }

        // Only errors on the key being set block the write
        let errors: Vec<String> = config
            .validate()
            .into_iter()
            .filter(|e| e.field == key)
            .map(|e| e.message)
            .collect();
        if !errors.is_empty() {
            if ctx.is_json() {
                formatter.print_json(&serde_json::json!({
                    "success": false,
                    "key": key,
                    "errors": errors,
                }));
            } else {
                formatter.error(&format!("Invalid value for '{}': {}", key, errors.join("; ")));
            }
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create configuration directory")?;
        }
        let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
        std::fs::write(config_path, yaml).context("Failed to write configuration file")?;

        if ctx.is_json() {
            formatter.print_json(&serde_json::json!({
                "success": true,
                "key": key,
                "config_path": config_path.display().to_string(),
            }));
        } else {
            formatter.success(&format!("Set {}", key));
            formatter.info(&format!("Saved to {}", config_path.display()));
        }
        Ok(())
    }

    fn execute_validate(&self, ctx: &Context) -> Result<()> {
        let formatter = ctx.formatter();
        let config_path = &ctx.config_path;

        if !config_path.exists() {
            if ctx.is_json() {
                formatter.print_json(&serde_json::json!({
                    "valid": false,
                    "config_path": config_path.display().to_string(),
                    "errors": ["Configuration file not found"],
                }));
            } else {
                formatter.error(&format!(
                    "Configuration file not found at {}",
                    config_path.display()
                ));
                formatter
                    .info("Run 'fbmarketing config set app.app_id <id>' to create one.");
            }
            return Ok(());
        }

        // Reload explicitly: the context falls back to defaults when loading fails
        let config = match Config::load(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                if ctx.is_json() {
                    formatter.print_json(&serde_json::json!({
                        "valid": false,
                        "config_path": config_path.display().to_string(),
                        "errors": [format!("Failed to parse configuration: {:#}", e)],
                    }));
                } else {
                    formatter.error(&format!("Failed to parse configuration: {:#}", e));
                    formatter.info(&format!("File: {}", config_path.display()));
                }
                return Ok(());
            }
        };

        info!(config_path = %config_path.display(), "Validating configuration");

        let errors = config.validate();

        if ctx.is_json() {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            formatter.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "config_path": config_path.display().to_string(),
                "errors": error_strings,
            }));
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
            formatter.info(&format!("File: {}", config_path.display()));
        } else {
            formatter.error(&format!(
                "Configuration has {} error{}:",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            formatter.info(&format!("File: {}", config_path.display()));
            formatter.info("");
            for error in &errors {
                formatter.info(&format!("  {} - {}", error.field, error.message));
            }
        }

        Ok(())
    }
}

/// Copy of `config` safe to print
fn redacted(config: &Config) -> Config {
    let mut config = config.clone();
    if config.app.app_secret.is_some() {
        config.app.app_secret = Some(REDACTED.to_string());
    }
    if config.auth.access_token.is_some() {
        config.auth.access_token = Some(REDACTED.to_string());
    }
    config
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() || value == "none" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Apply a dot-notation key/value pair to a Config struct
fn apply_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "app.app_id" => config.app.app_id = optional(value),
        "app.app_secret" => config.app.app_secret = optional(value),
        "app.api_version" => config.app.api_version = value.to_string(),
        "auth.access_token" => config.auth.access_token = optional(value),
        "http.timeout_secs" => {
            config.http.timeout_secs = value
                .parse::<u64>()
                .context("Expected a positive integer for http.timeout_secs")?;
        }
        "logging.level" => config.logging.level = value.to_string(),
        "logging.json" => {
            config.logging.json = value
                .parse::<bool>()
                .context("Expected true or false for logging.json")?;
        }
        _ => anyhow::bail!("Unknown configuration key: '{}'", key),
    }
    Ok(())
}
