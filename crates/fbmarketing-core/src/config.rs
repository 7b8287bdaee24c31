//! Configuration module for fbmarketing.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ApiVersion, DomainError};

/// Graph API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v19.0";

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for fbmarketing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Facebook application credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application ID from the Meta developer dashboard.
    pub app_id: Option<String>,
    /// Application secret, used as the key for `appsecret_proof`.
    pub app_secret: Option<String>,
    /// Graph API version segment, e.g. `v19.0`.
    pub api_version: String,
}

/// Default access token used by authenticated calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// User or page access token. `None` until the caller obtains one.
    pub access_token: Option<String>,
}

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Emit log lines as JSON instead of human-readable text.
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/fbmarketing/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("fbmarketing")
            .join("config.yaml")
    }
}

impl AppConfig {
    /// Returns `(app_id, app_secret)` or the first missing credential.
    pub fn credentials(&self) -> Result<(&str, &str), DomainError> {
        let app_id = self
            .app_id
            .as_deref()
            .ok_or_else(|| DomainError::MissingCredential("app.app_id".to_string()))?;
        let app_secret = self
            .app_secret
            .as_deref()
            .ok_or_else(|| DomainError::MissingCredential("app.app_secret".to_string()))?;
        Ok((app_id, app_secret))
    }

    /// Parses the configured version.
    pub fn api_version(&self) -> Result<ApiVersion, DomainError> {
        ApiVersion::new(self.api_version.clone())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_secret: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"app.api_version"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid. Missing credentials
    /// are not errors here; they are reported when a client is built.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- app ---
        if let Some(app_id) = &self.app.app_id {
            if app_id.is_empty() || !app_id.chars().all(|c| c.is_ascii_digit()) {
                errors.push(ValidationError {
                    field: "app.app_id".into(),
                    message: format!("must be numeric, got '{app_id}'"),
                });
            }
        }
        if matches!(&self.app.app_secret, Some(secret) if secret.is_empty()) {
            errors.push(ValidationError {
                field: "app.app_secret".into(),
                message: "must not be empty".into(),
            });
        }
        if let Err(e) = self.app.api_version() {
            errors.push(ValidationError {
                field: "app.api_version".into(),
                message: format!("{e}; expected the form v<major>.<minor>"),
            });
        }

        // --- auth ---
        if matches!(&self.auth.access_token, Some(token) if token.is_empty()) {
            errors.push(ValidationError {
                field: "auth.access_token".into(),
                message: "must not be empty".into(),
            });
        }

        // --- http ---
        if self.http.timeout_secs == 0 {
            errors.push(ValidationError {
                field: "http.timeout_secs".into(),
                message: "must be greater than 0".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use fbmarketing_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .app_id("1234567890")
///     .app_secret("shh")
///     .api_version("v19.0")
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- app ---

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config.app.app_id = Some(app_id.into());
        self
    }

    pub fn app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.config.app.app_secret = Some(app_secret.into());
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.app.api_version = version.into();
        self
    }

    // --- auth ---

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth.access_token = Some(token.into());
        self
    }

    // --- http ---

    pub fn http_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.http.timeout_secs = seconds;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_json(mut self, json: bool) -> Self {
        self.config.logging.json = json;
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
