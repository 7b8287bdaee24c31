//! Page webhook subscription commands
//!
//! Subscription endpoints are authenticated with a page token. When
//! `--page-token` is not given, the page token is looked up through the
//! user token's `/me/accounts`.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use fbmarketing_core::domain::GraphId;
use fbmarketing_graph::FacebookClient;
use serde_json::Value;
use tracing::debug;

use crate::context::Context;
use crate::output::OutputFormatter;

#[derive(Debug, Subcommand)]
pub enum SubscriptionsCommand {
    /// List the apps subscribed to a page
    List {
        /// Page ID
        page_id: GraphId,
        /// Page access token (looked up from the user token if omitted)
        #[arg(long)]
        page_token: Option<String>,
    },
    /// Subscribe this app to a page
    Create {
        /// Page ID
        page_id: GraphId,
        /// Page access token (looked up from the user token if omitted)
        #[arg(long)]
        page_token: Option<String>,
        /// Webhook fields to subscribe to, e.g. `leadgen` (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// Unsubscribe this app from a page
    Delete {
        /// Page ID
        page_id: GraphId,
        /// Page access token (looked up from the user token if omitted)
        #[arg(long)]
        page_token: Option<String>,
    },
}

impl SubscriptionsCommand {
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        let fmt = ctx.formatter();
        let client = ctx.client()?;

        let response = match self {
            SubscriptionsCommand::List {
                page_id,
                page_token,
            } => {
                let token = resolve_page_token(&client, page_id, page_token.as_deref()).await?;
                client
                    .get_page_subscribed_apps(page_id.as_str(), &token)
                    .await
                    .context("Failed to list subscribed apps")?
            }
            SubscriptionsCommand::Create {
                page_id,
                page_token,
                fields,
            } => {
                let token = resolve_page_token(&client, page_id, page_token.as_deref()).await?;
                let response = if fields.is_empty() {
                    client
                        .create_page_subscribed_apps(page_id.as_str(), &token)
                        .await
                } else {
                    client
                        .create_page_subscribed_apps_with_fields(
                            page_id.as_str(),
                            &token,
                            fields.as_slice(),
                        )
                        .await
                };
                response.context("Failed to subscribe app to page")?
            }
            SubscriptionsCommand::Delete {
                page_id,
                page_token,
            } => {
                let token = resolve_page_token(&client, page_id, page_token.as_deref()).await?;
                client
                    .delete_page_subscribed_apps(page_id.as_str(), &token)
                    .await
                    .context("Failed to unsubscribe app from page")?
            }
        };

        self.report(&*fmt, ctx.is_json(), &response);
        Ok(())
    }

    /// Confirmation line for mutating commands
    fn confirmation(&self) -> Option<String> {
        match self {
            SubscriptionsCommand::List { .. } => None,
            SubscriptionsCommand::Create { page_id, .. } => {
                Some(format!("App subscribed to page {page_id}"))
            }
            SubscriptionsCommand::Delete { page_id, .. } => {
                Some(format!("App unsubscribed from page {page_id}"))
            }
        }
    }

    /// In JSON mode the response is the only document written to stdout
    fn report(&self, fmt: &dyn OutputFormatter, json: bool, response: &Value) {
        if !json {
            if let Some(message) = self.confirmation() {
                fmt.success(&message);
            }
        }
        fmt.print_value(response);
    }
}

async fn resolve_page_token(
    client: &FacebookClient,
    page_id: &GraphId,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(token) = explicit {
        return Ok(token.to_string());
    }

    debug!(%page_id, "Looking up page token");
    let page = client
        .get_page_token(page_id.as_str())
        .await
        .context("Failed to look up page token")?
        .with_context(|| format!("Page {page_id} is not managed by this account"))?;
    page.access_token
        .with_context(|| format!("No page token returned for page {page_id}"))
}
