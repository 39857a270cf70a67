//! HTTP client for the remote table store's rows API.
//!
//! Every request targets `{base}/api/database/rows/table/{table_id}/`, carries
//! the `Authorization: Token ...` header and asks for user field names so rows
//! come back keyed by column name instead of `field_<n>`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::table_store::query::RowQuery;

/// One page of a rows listing. Callers only ever see the first page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Clone)]
pub struct TableStoreClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl TableStoreClient {
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| Error::Config(format!("invalid table store URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: token.to_owned(),
        })
    }

    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn get<T: DeserializeOwned>(&self, table_id: u32, query: &RowQuery) -> Result<Page<T>> {
        let mut url = self.rows_url(table_id, None)?;
        url.query_pairs_mut().extend_pairs(query.pairs());
        debug!(%url, "listing rows");
        self.send_json(self.client.get(url), &format!("list table {table_id}"))
            .await
    }

    #[instrument(skip(self, record))]
    pub async fn post<B, T>(&self, table_id: u32, record: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.rows_url(table_id, None)?;
        self.send_json(
            self.client.post(url).json(record),
            &format!("create row in table {table_id}"),
        )
        .await
    }

    #[instrument(skip(self, fields))]
    pub async fn patch<B, T>(&self, table_id: u32, row_id: i64, fields: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.rows_url(table_id, Some(row_id))?;
        self.send_json(
            self.client.patch(url).json(fields),
            &format!("update row {row_id} in table {table_id}"),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, table_id: u32, row_id: i64) -> Result<()> {
        let url = self.rows_url(table_id, Some(row_id))?;
        let response = self.authorized(self.client.delete(url)).send().await?;
        Self::check_status(response, &format!("delete row {row_id} in table {table_id}"))
            .await
            .map(|_| ())
    }

    fn rows_url(&self, table_id: u32, row_id: Option<i64>) -> Result<Url> {
        let path = match row_id {
            Some(row_id) => format!("api/database/rows/table/{table_id}/{row_id}/"),
            None => format!("api/database/rows/table/{table_id}/"),
        };
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| Error::Internal(format!("invalid rows path '{path}': {e}")))?;
        url.query_pairs_mut().append_pair("user_field_names", "true");
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(
            reqwest::header::AUTHORIZATION,
            format!("Token {}", self.token),
        )
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T> {
        let response = self.authorized(request).send().await?;
        let response = Self::check_status(response, context).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message: String = body.chars().take(500).collect();
        Err(Error::TableStore {
            status: status.as_u16(),
            message: format!("{context}: {message}"),
        })
    }
}
