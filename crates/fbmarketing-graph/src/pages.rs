//! Account, pages and page subscriptions
//!
//! `get_account`, `get_pages` and `get_page_token` use the client's default
//! access token. The subscribed-apps calls take a page access token
//! explicitly and never fall back to the default one.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{FacebookClient, Params};
use crate::GraphError;

/// A page managed by the authenticated user, as listed by `/me/accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Page access token, used for the page's own endpoints
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl FacebookClient {
    /// Gets the authenticated account (`GET /me`)
    pub async fn get_account(&self) -> Result<Value, GraphError> {
        let params = self.auth_params(None)?.into_params();
        self.send(Method::GET, "/me", &params, None).await
    }

    /// Gets the pages of the authenticated account (`GET /me/accounts`)
    pub async fn get_pages(&self) -> Result<Value, GraphError> {
        let params = self.auth_params(None)?.into_params();
        self.send(Method::GET, "/me/accounts", &params, None).await
    }

    /// Finds a page of the authenticated account by ID
    ///
    /// Returns `Ok(None)` when the account has no page with that ID.
    pub async fn get_page_token(&self, page_id: &str) -> Result<Option<Page>, GraphError> {
        self.require_access_token()?;
        let pages = self.get_pages().await?;
        let page = find_page(&pages, page_id)?;
        if page.is_none() {
            debug!(page_id, "Page not found among account pages");
        }
        Ok(page)
    }

    /// Lists the apps subscribed to a page (`GET /{page_id}/subscribed_apps`)
    pub async fn get_page_subscribed_apps(
        &self,
        page_id: &str,
        token: &str,
    ) -> Result<Value, GraphError> {
        let params = self.auth_params(Some(token))?.into_params();
        let path = Self::node_path(page_id, SUBSCRIBED_APPS)?;
        self.send(Method::GET, &path, &params, None).await
    }

    /// Subscribes this app to a page (`POST /{page_id}/subscribed_apps`)
    pub async fn create_page_subscribed_apps(
        &self,
        page_id: &str,
        token: &str,
    ) -> Result<Value, GraphError> {
        info!(page_id, "Subscribing app to page");
        let params = self.auth_params(Some(token))?.into_params();
        let path = Self::node_path(page_id, SUBSCRIBED_APPS)?;
        self.send(Method::POST, &path, &params, None).await
    }

    /// Subscribes this app to a page for specific webhook fields
    /// (e.g. `leadgen`), sent as the `subscribed_fields` form field
    pub async fn create_page_subscribed_apps_with_fields<S: AsRef<str>>(
        &self,
        page_id: &str,
        token: &str,
        fields: &[S],
    ) -> Result<Value, GraphError> {
        info!(page_id, "Subscribing app to page fields");
        let params = self.auth_params(Some(token))?.into_params();
        let subscribed_fields = fields
            .iter()
            .map(|f| f.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        let form: Params = vec![("subscribed_fields", subscribed_fields)];
        let path = Self::node_path(page_id, SUBSCRIBED_APPS)?;
        self.send(Method::POST, &path, &params, Some(&form)).await
    }

    /// Unsubscribes this app from a page (`DELETE /{page_id}/subscribed_apps`)
    pub async fn delete_page_subscribed_apps(
        &self,
        page_id: &str,
        token: &str,
    ) -> Result<Value, GraphError> {
        info!(page_id, "Unsubscribing app from page");
        let params = self.auth_params(Some(token))?.into_params();
        let path = Self::node_path(page_id, SUBSCRIBED_APPS)?;
        self.send(Method::DELETE, &path, &params, None).await
    }
}

const SUBSCRIBED_APPS: &str = "subscribed_apps";

/// Linear scan of a `/me/accounts` body for `page_id`
fn find_page(pages: &Value, page_id: &str) -> Result<Option<Page>, GraphError> {
    let data = pages
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| GraphError::InvalidResponse("pages response without a data list".into()))?;

    data.iter()
        .find(|page| page.get("id").and_then(Value::as_str) == Some(page_id))
        .map(|page| {
            serde_json::from_value(page.clone())
                .map_err(|e| GraphError::InvalidResponse(format!("Failed to parse page: {e}")))
        })
        .transpose()
}
