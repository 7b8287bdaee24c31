//! Lead generation forms and leads

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::{FacebookClient, Params};
use crate::GraphError;

impl FacebookClient {
    /// Gets the lead generation forms of a page (`GET /{page_id}/leadgen_forms`)
    pub async fn get_ad_account_leadgen_forms(&self, page_id: &str) -> Result<Value, GraphError> {
        let params = self.auth_params(None)?.into_params();
        let path = Self::node_path(page_id, "leadgen_forms")?;
        self.send(Method::GET, &path, &params, None).await
    }

    /// Gets the leads of a form (`GET /{form_id}/leads`)
    ///
    /// `from_date` is sent as the `from_date` parameter in Unix seconds.
    pub async fn get_ad_leads(
        &self,
        form_id: &str,
        from_date: Option<DateTime<Utc>>,
    ) -> Result<Value, GraphError> {
        let mut params = self.auth_params(None)?.into_params();
        params.extend(from_date_param(from_date));
        debug!(form_id, ?from_date, "Fetching leads");
        let path = Self::node_path(form_id, "leads")?;
        self.send(Method::GET, &path, &params, None).await
    }
}

fn from_date_param(from_date: Option<DateTime<Utc>>) -> Params {
    from_date
        .map(|date| vec![("from_date", date.timestamp().to_string())])
        .unwrap_or_default()
}
