//! Facebook Graph API client
//!
//! Provides the HTTP client shared by every endpoint module. Handles the
//! versioned base URL, `access_token` / `appsecret_proof` parameters, JSON
//! decoding and translation of Graph API error payloads.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fbmarketing_graph::client::FacebookClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = FacebookClient::new("1234567890", "app-secret", "v19.0");
//! client.set_access_token("user-access-token");
//! let me = client.get_account().await?;
//! println!("Hello, {}", me["name"]);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use anyhow::Context;
use fbmarketing_core::config::Config;
use fbmarketing_core::domain::GraphId;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::AuthParams;
use crate::error_code::classify;
use crate::GraphError;

/// Host of the Graph API; the version segment is appended per client
const GRAPH_BASE_URL: &str = "https://graph.facebook.com";

/// Request parameters, in the order they are sent
pub type Params = Vec<(&'static str, String)>;

// ============================================================================
// FacebookClient
// ============================================================================

/// HTTP client for Facebook Graph API calls
///
/// Holds the application credentials and the current default access token.
/// Mutating the token needs `&mut self`, so a shared instance must be
/// wrapped by the caller (e.g. in a `Mutex`) before concurrent use.
pub struct FacebookClient {
    /// The underlying HTTP client
    client: Client,
    /// Versioned base URL, e.g. `https://graph.facebook.com/v19.0`
    base_url: String,
    app_id: String,
    app_secret: String,
    version: String,
    /// Default token for authenticated calls
    access_token: Option<String>,
}

impl FacebookClient {
    /// Creates a client bound to `https://graph.facebook.com/{version}`
    ///
    /// # Arguments
    /// * `app_id` - Application ID
    /// * `app_secret` - Application secret, key of every `appsecret_proof`
    /// * `version` - Graph API version segment, e.g. `v19.0`
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::with_base_url(app_id, app_secret, version, GRAPH_BASE_URL)
    }

    /// Creates a client against a custom host (useful for testing)
    ///
    /// The version segment is appended to `base_url`.
    pub fn with_base_url(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        version: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let version = version.into();
        let base_url = format!("{}/{}", base_url.into().trim_end_matches('/'), version);
        Self {
            client: Client::new(),
            base_url,
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            version,
            access_token: None,
        }
    }

    /// Builds a client from the `app`, `auth` and `http` configuration sections
    ///
    /// Fails when the app ID or secret is missing, the version is malformed,
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let (app_id, app_secret) = config.app.credentials()?;
        let version = config.app.api_version()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        let mut client = Self::new(app_id, app_secret, version.as_str()).with_http_client(http);
        if let Some(token) = &config.auth.access_token {
            client.set_access_token(token.clone());
        }
        Ok(client)
    }

    /// Replaces the underlying HTTP client (timeouts, proxies, ...)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the default access token. No validation is performed.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        info!("Updated FacebookClient access token");
    }

    /// Returns the current default access token, if one has been set
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the versioned base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default token or [`GraphError::AccessTokenRequired`]
    pub(crate) fn require_access_token(&self) -> Result<&str, GraphError> {
        self.access_token
            .as_deref()
            .ok_or(GraphError::AccessTokenRequired)
    }

    /// Builds `access_token` and `appsecret_proof` for a call
    ///
    /// Uses `token` when given, otherwise the default token. Fails with
    /// [`GraphError::AccessTokenRequired`] when neither exists.
    pub fn auth_params(&self, token: Option<&str>) -> Result<AuthParams, GraphError> {
        let token = match token {
            Some(token) => token,
            None => self.require_access_token()?,
        };
        Ok(AuthParams::new(token, &self.app_secret))
    }

    /// Path of an edge of a node, e.g. `/{page_id}/subscribed_apps`
    ///
    /// The ID must be a plain Graph node ID (ASCII alphanumerics and `_`).
    pub(crate) fn node_path(node_id: &str, edge: &str) -> Result<String, GraphError> {
        let node_id = GraphId::new(node_id.to_string())?;
        Ok(format!("/{node_id}/{edge}"))
    }

    /// Creates a request builder for the given method and path
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, DELETE)
    /// * `path` - API path relative to the versioned base URL (e.g. "/me")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Sends a request and parses the Graph API response
    ///
    /// `query` goes to the query string, `form` (when given) to an
    /// `application/x-www-form-urlencoded` body. The body is decoded as JSON
    /// whatever the HTTP status, since Graph API errors arrive on 4xx
    /// responses with a JSON payload.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        form: Option<&Params>,
    ) -> Result<Value, GraphError> {
        debug!(%method, path, "Sending Graph API request");

        let mut builder = self.request(method.clone(), path).query(query);
        if let Some(form) = form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            GraphError::InvalidResponse(format!(
                "{method} {path} returned HTTP {status} with a non-JSON body: {e}"
            ))
        })?;

        debug!(%method, path, %status, "Graph API response received");
        parse_response(body)
    }

    /// GET `path` and deserialize the parsed body into `T`
    pub(crate) async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Params,
    ) -> Result<T, GraphError> {
        let body = self.send(Method::GET, path, query, None).await?;
        serde_json::from_value(body)
            .map_err(|e| GraphError::InvalidResponse(format!("Failed to parse {path} response: {e}")))
    }
}

// ============================================================================
// Response parsing
// ============================================================================

/// Returns the body unchanged, or the classified error it carries
///
/// The error object is looked up at `error`, then at `data.error`.
/// A null or empty error object counts as absent.
pub fn parse_response(body: Value) -> Result<Value, GraphError> {
    let error = body
        .get("error")
        .or_else(|| body.get("data").and_then(|data| data.get("error")));

    let error = match error {
        Some(error) if !is_empty(error) => error,
        _ => return Ok(body),
    };

    let code = error.get("code").and_then(as_code).ok_or_else(|| {
        GraphError::InvalidResponse(format!("error object without a numeric code: {error}"))
    })?;
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GraphError::InvalidResponse(format!("error object without a message: {error}"))
        })?;

    warn!(code, message, "Graph API returned an error");
    Err(classify(code, message.to_string()))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn as_code(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
