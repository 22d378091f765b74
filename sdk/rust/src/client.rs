use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// An item as returned by the service: `id` plus arbitrary fields.
pub type Item = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned error status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub struct ItemsClient {
    client: Client,
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every item.
    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/items", self.base_url))
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    /// Create an item from any serializable object.
    pub async fn create<T: Serialize + ?Sized>(&self, fields: &T) -> Result<Item, ClientError> {
        let resp = self
            .client
            .post(format!("{}/items", self.base_url))
            .json(fields)
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    /// Merge fields into an item. Returns `None` if no item has that id.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: impl std::fmt::Display,
        fields: &T,
    ) -> Result<Option<Item>, ClientError> {
        let resp = self
            .client
            .put(format!("{}/items/{}", self.base_url, id))
            .json(fields)
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(ensure_success(resp).await?.json().await?))
    }

    /// Delete an item. Succeeds whether or not it existed.
    pub async fn delete(&self, id: impl std::fmt::Display) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(format!("{}/items/{}", self.base_url, id))
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
