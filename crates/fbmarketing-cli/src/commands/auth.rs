//! Auth commands - OAuth dialog URL and token endpoints
//!
//! Provides the `fbmarketing auth` CLI subcommands which:
//! 1. `url`       - Prints (and optionally opens) the OAuth login dialog URL
//! 2. `app-token` - Exchanges the app credentials for an application token
//! 3. `exchange`  - Exchanges an OAuth code for a user token
//! 4. `extend`    - Exchanges a short-lived token for a long-lived one
//! 5. `inspect`   - Shows validity, expiry and scopes of a token
//! 6. `proof`     - Prints the appsecret_proof for a token
//!
//! Tokens are printed, never stored: persisting them is left to the caller.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use fbmarketing_graph::auth::{build_authorization_url, AccessToken, TokenInfo};
use tracing::{info, warn};

use crate::context::Context;
use crate::output::OutputFormatter;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Print the OAuth login dialog URL
    Url {
        /// Redirect URL registered in the app settings
        #[arg(long)]
        redirect_url: String,
        /// Permission to request (repeat or comma-separate)
        #[arg(long = "scope", value_delimiter = ',')]
        scopes: Vec<String>,
        /// Open the URL in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Get an application token (client credentials grant)
    AppToken,
    /// Exchange an OAuth code for a user token
    Exchange {
        /// Redirect URL used when the code was issued
        #[arg(long)]
        redirect_url: String,
        /// Code received on the redirect URL
        #[arg(long)]
        code: String,
    },
    /// Exchange a short-lived token for a long-lived token
    Extend {
        /// Token to extend (defaults to the configured access token)
        #[arg(long = "short-lived-token")]
        short_lived_token: Option<String>,
    },
    /// Inspect an access token
    Inspect {
        /// Token to inspect (defaults to the configured access token)
        #[arg(long)]
        input_token: Option<String>,
        /// App or developer token used to inspect (defaults to a fresh app token)
        #[arg(long)]
        app_token: Option<String>,
    },
    /// Print the appsecret_proof for a token
    Proof {
        /// Token to sign (defaults to the configured access token)
        #[arg(long = "for-token")]
        for_token: Option<String>,
    },
}

impl AuthCommand {
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        let fmt = ctx.formatter();
        match self {
            AuthCommand::Url {
                redirect_url,
                scopes,
                open,
            } => self.execute_url(ctx, &*fmt, redirect_url, scopes, *open),
            AuthCommand::AppToken => {
                let client = ctx.client()?;
                let token = client
                    .get_app_token()
                    .await
                    .context("Failed to get application token")?;
                print_token(ctx, &*fmt, "Application token obtained", &token)
            }
            AuthCommand::Exchange { redirect_url, code } => {
                let client = ctx.client()?;
                let token = client
                    .exchange_code(redirect_url, code)
                    .await
                    .context("Failed to exchange authorization code")?;
                print_token(ctx, &*fmt, "User token obtained", &token)
            }
            AuthCommand::Extend { short_lived_token } => {
                let short_lived = short_lived_token
                    .as_deref()
                    .or(ctx.access_token())
                    .context("No token to extend. Use --short-lived-token, --token or set auth.access_token")?;
                let client = ctx.client()?;
                let token = client
                    .extend_token(short_lived)
                    .await
                    .context("Failed to extend token")?;
                print_token(ctx, &*fmt, "Long-lived token obtained", &token)
            }
            AuthCommand::Inspect {
                input_token,
                app_token,
            } => {
                self.execute_inspect(ctx, &*fmt, input_token.as_deref(), app_token.as_deref())
                    .await
            }
            AuthCommand::Proof { for_token } => {
                let client = ctx.client()?;
                let params = client
                    .auth_params(for_token.as_deref())
                    .context("No token to sign. Use --for-token, --token or set auth.access_token")?;
                if ctx.is_json() {
                    fmt.print_json(&serde_json::json!({
                        "appsecret_proof": params.appsecret_proof(),
                    }));
                } else {
                    println!("{}", params.appsecret_proof());
                }
                Ok(())
            }
        }
    }

    fn execute_url(
        &self,
        ctx: &Context,
        fmt: &dyn OutputFormatter,
        redirect_url: &str,
        scopes: &[String],
        open: bool,
    ) -> Result<()> {
        let app_id = ctx
            .config
            .app
            .app_id
            .as_deref()
            .context("No app_id configured. Set app.app_id in config.yaml")?;

        let url = build_authorization_url(app_id, redirect_url, scopes);

        if ctx.is_json() {
            fmt.print_json(&serde_json::json!({ "url": url }));
        } else {
            println!("{url}");
        }

        if open {
            info!("Opening OAuth dialog in browser");
            if let Err(e) = webbrowser::open(&url) {
                warn!(error = %e, "Failed to open browser");
                fmt.warn("Could not open a browser; open the URL above manually");
            }
        }
        Ok(())
    }

    async fn execute_inspect(
        &self,
        ctx: &Context,
        fmt: &dyn OutputFormatter,
        input_token: Option<&str>,
        app_token: Option<&str>,
    ) -> Result<()> {
        let input_token = input_token
            .or(ctx.access_token())
            .context("No token to inspect. Use --input-token, --token or set auth.access_token")?;
        let client = ctx.client()?;

        let inspector = match app_token {
            Some(token) => token.to_string(),
            None => {
                client
                    .get_app_token()
                    .await
                    .context("Failed to get application token for inspection")?
                    .access_token
            }
        };

        let info = client
            .inspect_token(input_token, &inspector)
            .await
            .context("Failed to inspect token")?;

        print_token_info(ctx, fmt, &info)
    }
}

fn print_token(
    ctx: &Context,
    fmt: &dyn OutputFormatter,
    headline: &str,
    token: &AccessToken,
) -> Result<()> {
    if ctx.is_json() {
        fmt.print_json(&serde_json::to_value(token).context("Failed to serialize token")?);
        return Ok(());
    }

    fmt.success(headline);
    fmt.info(&format!("Access token: {}", token.access_token));
    if let Some(token_type) = &token.token_type {
        fmt.info(&format!("Type:         {token_type}"));
    }
    match token.expires_in {
        Some(secs) => fmt.info(&format!("Expires in:   {} days", secs / 86_400)),
        None => fmt.info("Expires in:   never"),
    }
    Ok(())
}

fn print_token_info(ctx: &Context, fmt: &dyn OutputFormatter, info: &TokenInfo) -> Result<()> {
    if ctx.is_json() {
        fmt.print_json(&serde_json::to_value(info).context("Failed to serialize token info")?);
        return Ok(());
    }

    if info.is_valid {
        fmt.success("Token is valid");
    } else {
        fmt.error("Token is not valid");
    }
    if let Some(application) = &info.application {
        fmt.info(&format!("Application: {application}"));
    }
    if let Some(token_type) = &info.token_type {
        fmt.info(&format!("Type:        {token_type}"));
    }
    if let Some(user_id) = &info.user_id {
        fmt.info(&format!("User ID:     {user_id}"));
    }
    match info.expires_at {
        Some(0) | None => fmt.info("Expires:     never"),
        Some(ts) => {
            let expires = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| ts.to_string());
            fmt.info(&format!("Expires:     {expires}"));
        }
    }
    if !info.scopes.is_empty() {
        fmt.info(&format!("Scopes:      {}", info.scopes.join(", ")));
    }
    Ok(())
}
