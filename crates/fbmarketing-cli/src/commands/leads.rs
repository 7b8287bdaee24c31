//! Lead generation commands

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use fbmarketing_core::domain::GraphId;

use crate::context::Context;

#[derive(Debug, Subcommand)]
pub enum LeadsCommand {
    /// List the lead generation forms of a page
    Forms {
        /// Page ID
        page_id: GraphId,
    },
    /// List the leads of a form
    List {
        /// Lead form ID
        form_id: GraphId,
        /// Only leads created at or after this time (RFC 3339, e.g. 2024-01-01T00:00:00Z)
        #[arg(long)]
        since: Option<DateTime<Utc>>,
    },
}

impl LeadsCommand {
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        let fmt = ctx.formatter();
        let client = ctx.client()?;

        let response = match self {
            LeadsCommand::Forms { page_id } => client
                .get_ad_account_leadgen_forms(page_id.as_str())
                .await
                .with_context(|| format!("Failed to list lead forms of page {page_id}"))?,
            LeadsCommand::List { form_id, since } => client
                .get_ad_leads(form_id.as_str(), *since)
                .await
                .with_context(|| format!("Failed to list leads of form {form_id}"))?,
        };

        fmt.print_value(&response);
        Ok(())
    }
}
