//! Account commands - the token owner and the pages it manages

use anyhow::{Context as _, Result};
use clap::Subcommand;
use fbmarketing_core::domain::GraphId;

use crate::context::Context;

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show the account that owns the access token
    Me,
    /// List the pages managed by the account
    Pages,
    /// Show a page of the account together with its page token
    PageToken {
        /// Page ID
        page_id: GraphId,
    },
}

impl AccountCommand {
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        let fmt = ctx.formatter();
        let client = ctx.client()?;

        match self {
            AccountCommand::Me => {
                let account = client
                    .get_account()
                    .await
                    .context("Failed to get account")?;
                fmt.print_value(&account);
            }
            AccountCommand::Pages => {
                let pages = client.get_pages().await.context("Failed to list pages")?;
                fmt.print_value(&pages);
            }
            AccountCommand::PageToken { page_id } => {
                let page = client
                    .get_page_token(page_id.as_str())
                    .await
                    .context("Failed to look up page")?
                    .with_context(|| format!("Page {page_id} is not managed by this account"))?;
                fmt.print_value(&serde_json::to_value(&page).context("Failed to serialize page")?);
            }
        }
        Ok(())
    }
}
