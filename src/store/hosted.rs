//! Hosted record store backend
//!
//! Speaks the hosted service's table REST dialect: one resource per
//! table, filters in the query string, mutated rows echoed back when
//! asked for with a `Prefer` header.

use async_trait::async_trait;
use reqwest::{header, Client, Response};

use crate::types::{Entry, Fields};
use crate::{Error, Result};

use super::RecordStore;

const USER_AGENT: &str = "guestbook";
const PREFER_REPRESENTATION: &str = "return=representation";

/// Client for one table of the hosted record store
pub struct HostedStore {
    client: Client,
    base_url: String,
    table: String,
}

impl HostedStore {
    /// Build a client scoped to `table` at the service `url`.
    ///
    /// The access key rides on every request, both as the service's
    /// `apikey` header and as a bearer token.
    pub fn new(url: String, key: String, table: String) -> Result<Self> {
        let mut api_key = header::HeaderValue::from_str(&key)
            .map_err(|_| Error::config("store key contains invalid header characters"))?;
        api_key.set_sensitive(true);

        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| Error::config("store key contains invalid header characters"))?;
        auth_value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = Client::builder()
            .user_agent(format!("{}/{}", USER_AGENT, env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            table,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

/// Reject non-success replies, keeping the service's own description
async fn ensure_success(op: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::store(format!("{} rejected: {} {}", op, status, body)))
}

#[async_trait]
impl RecordStore for HostedStore {
    async fn list(&self) -> Result<Vec<Entry>> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let response = ensure_success("list", response).await?;
        Ok(response.json().await?)
    }

    async fn insert(&self, fields: Fields) -> Result<Vec<Entry>> {
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&fields)
            .send()
            .await?;

        let response = ensure_success("insert", response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, fields: Fields) -> Result<Vec<Entry>> {
        // The service's update verb is PATCH; a filter that matches no
        // row comes back as an empty array, not an error.
        let response = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&fields)
            .send()
            .await?;

        let response = ensure_success("update", response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;

        ensure_success("delete", response).await?;
        Ok(())
    }
}
