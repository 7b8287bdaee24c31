//! Per-invocation state shared by all commands

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use fbmarketing_core::config::Config;
use fbmarketing_graph::FacebookClient;

use crate::output::{get_formatter, OutputFormat, OutputFormatter};

/// Loaded configuration plus global CLI flags
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    /// `--token` override; takes precedence over `auth.access_token`
    pub token: Option<String>,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        token: Option<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            config,
            config_path,
            token,
            format,
        }
    }

    /// Builds a client from the config, applying the `--token` override
    pub fn client(&self) -> Result<FacebookClient> {
        let mut client = FacebookClient::from_config(&self.config).with_context(|| {
            format!(
                "Cannot build Graph API client from {}",
                self.config_path.display()
            )
        })?;
        if let Some(token) = &self.token {
            client.set_access_token(token.clone());
        }
        Ok(client)
    }

    /// The effective default token: `--token`, then `auth.access_token`
    pub fn access_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.config.auth.access_token.as_deref())
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        get_formatter(self.is_json())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
