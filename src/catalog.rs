use crate::auth;
use crate::config::Config;
use crate::paging::Pager;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("catalog API returned status {0}")]
    Status(StatusCode),
}

/// One product record, as returned by the catalog API.
///
/// The upstream field for the product name is literally called `product`.
/// Records are never mutated locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub product: String,
    pub price: f64,
    pub brand: Option<String>,
}

/// Request envelope: every call is a POST to the same URL
#[derive(Debug, Serialize)]
struct Envelope<'a, P: Serialize> {
    action: &'a str,
    params: P,
}

#[derive(Debug, Serialize)]
struct IdsParams {
    offset: u64,
    limit: u32,
}

#[derive(Debug, Serialize)]
struct ItemsParams<'a> {
    ids: &'a [String],
}

#[derive(Debug, Deserialize)]
struct ResultEnvelope<T> {
    result: T,
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    secret: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.clone(),
            secret: config.api_secret.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Fetch the identifier window for one page of the catalog.
    ///
    /// Past-the-end offsets yield an empty window, not an error. The
    /// upstream occasionally repeats identifiers; they are passed through
    /// undeduplicated.
    pub async fn get_ids(&self, offset: u64, limit: u32) -> Result<Vec<String>, CatalogError> {
        self.call("get_ids", IdsParams { offset, limit }).await
    }

    /// Resolve an identifier window into full product records.
    pub async fn get_items(&self, ids: &[String]) -> Result<Vec<Product>, CatalogError> {
        self.call("get_items", ItemsParams { ids }).await
    }

    /// Fetch all product records for one page: identifier window first,
    /// then the records themselves. An empty window short-circuits the
    /// second call.
    pub async fn fetch_page(&self, pager: &Pager) -> Result<Vec<Product>, CatalogError> {
        let ids = self.get_ids(pager.offset(), pager.limit()).await?;
        debug!("Page {}: {} ids in window", pager.page(), ids.len());

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.get_items(&ids).await
    }

    async fn call<P, T>(&self, action: &str, params: P) -> Result<T, CatalogError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        // The token is date-dependent, so derive it per call rather than
        // holding one across UTC midnight.
        let token = auth::auth_token(&self.secret);

        let response = self
            .client
            .post(&self.base_url)
            .header("X-Auth", token)
            .timeout(self.timeout)
            .json(&Envelope { action, params })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let envelope: ResultEnvelope<T> = response.json().await?;
        Ok(envelope.result)
    }
}
