//! Authentication for the Facebook Graph API
//!
//! Facebook's documented login flow, expressed as URL and parameter
//! construction only:
//!
//! - [`app_secret_proof`] - HMAC-SHA256 of an access token keyed by the app secret
//! - [`AuthParams`] - The `access_token` / `appsecret_proof` pair sent on authenticated calls
//! - [`build_authorization_url`] - The OAuth dialog URL a user is sent to
//! - Token endpoints on [`FacebookClient`]: app token, code exchange,
//!   long-lived token exchange and token inspection

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::client::{FacebookClient, Params};
use crate::GraphError;

type HmacSha256 = Hmac<Sha256>;

/// Facebook OAuth login dialog
const OAUTH_DIALOG_URL: &str = "https://facebook.com/dialog/oauth";

/// Token exchange endpoint, relative to the versioned base URL
const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";

/// Token introspection endpoint, relative to the versioned base URL
const DEBUG_TOKEN_PATH: &str = "/debug_token";

// ============================================================================
// App secret proof
// ============================================================================

/// Computes the `appsecret_proof` for `token`: HMAC-SHA256 keyed by
/// `app_secret`, as a lowercase hex digest.
pub fn app_secret_proof(token: &str, app_secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(app_secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Credentials attached to an authenticated request.
///
/// Token and proof are always produced together, so the proof can never
/// belong to a different token than the one sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    access_token: String,
    appsecret_proof: String,
}

impl AuthParams {
    /// Builds the pair for `token`, signing it with `app_secret`.
    pub fn new(token: &str, app_secret: &str) -> Self {
        Self {
            access_token: token.to_string(),
            appsecret_proof: app_secret_proof(token, app_secret),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn appsecret_proof(&self) -> &str {
        &self.appsecret_proof
    }

    /// Converts into request parameters, ready to be extended with
    /// endpoint-specific fields.
    pub fn into_params(self) -> Params {
        vec![
            ("access_token", self.access_token),
            ("appsecret_proof", self.appsecret_proof),
        ]
    }
}

// ============================================================================
// OAuth dialog
// ============================================================================

/// Builds the OAuth login dialog URL.
///
/// Scopes are joined with a single space; the query is form-encoded.
pub fn build_authorization_url<S: AsRef<str>>(
    app_id: &str,
    redirect_url: &str,
    scopes: &[S],
) -> String {
    let scope = scopes
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", app_id)
        .append_pair("redirect_uri", redirect_url)
        .append_pair("scope", &scope)
        .finish();

    format!("{OAUTH_DIALOG_URL}?{query}")
}

// ============================================================================
// Token endpoint response types
// ============================================================================

/// Response from `/oauth/access_token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The issued token
    pub access_token: String,
    /// Usually `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds; absent for app tokens
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Token metadata returned by `/debug_token`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub app_id: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub application: Option<String>,
    /// Unix timestamp; `0` means the token never expires
    pub expires_at: Option<i64>,
    pub data_access_expires_at: Option<i64>,
    pub issued_at: Option<i64>,
    pub is_valid: bool,
    pub scopes: Vec<String>,
    pub user_id: Option<String>,
    pub profile_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DebugTokenResponse {
    data: TokenInfo,
}

// ============================================================================
// Token endpoints
// ============================================================================

impl FacebookClient {
    /// Exchanges the app credentials for an application token
    /// (`grant_type=client_credentials`). Unauthenticated.
    pub async fn get_app_token(&self) -> Result<AccessToken, GraphError> {
        debug!("Requesting application token");
        let params: Params = vec![
            ("client_id", self.app_id().to_string()),
            ("client_secret", self.app_secret().to_string()),
            ("grant_type", "client_credentials".to_string()),
        ];
        self.get_as(ACCESS_TOKEN_PATH, &params).await
    }

    /// Builds the OAuth login dialog URL for this app. No network call.
    pub fn authorization_url<S: AsRef<str>>(&self, redirect_url: &str, scopes: &[S]) -> String {
        build_authorization_url(self.app_id(), redirect_url, scopes)
    }

    /// Exchanges an OAuth `code` returned to `redirect_url` for a user token.
    pub async fn exchange_code(
        &self,
        redirect_url: &str,
        code: &str,
    ) -> Result<AccessToken, GraphError> {
        info!(redirect_url, "Exchanging authorization code");
        let params: Params = vec![
            ("client_id", self.app_id().to_string()),
            ("redirect_uri", redirect_url.to_string()),
            ("client_secret", self.app_secret().to_string()),
            ("code", code.to_string()),
        ];
        self.get_as(ACCESS_TOKEN_PATH, &params).await
    }

    /// Exchanges a short-lived token for a long-lived one
    /// (`grant_type=fb_exchange_token`).
    pub async fn extend_token(&self, token: &str) -> Result<AccessToken, GraphError> {
        info!("Exchanging short-lived token for a long-lived token");
        let params: Params = vec![
            ("grant_type", "fb_exchange_token".to_string()),
            ("client_id", self.app_id().to_string()),
            ("client_secret", self.app_secret().to_string()),
            ("fb_exchange_token", token.to_string()),
        ];
        self.get_as(ACCESS_TOKEN_PATH, &params).await
    }

    /// Inspects `input_token` using `token`, which must be an app token or
    /// a developer token of the app owner.
    pub async fn inspect_token(
        &self,
        input_token: &str,
        token: &str,
    ) -> Result<TokenInfo, GraphError> {
        debug!("Inspecting access token");
        let params: Params = vec![
            ("input_token", input_token.to_string()),
            ("access_token", token.to_string()),
        ];
        let response: DebugTokenResponse = self.get_as(DEBUG_TOKEN_PATH, &params).await?;
        Ok(response.data)
    }
}
