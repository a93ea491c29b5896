use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::store::{
    StoreError, SubscriptionRequest, SubscriptionStore, UNIQUE_VIOLATION,
};

/// Error body returned by the hosted table's REST layer.
#[derive(Debug, Default, Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Inserts through a hosted Postgres REST endpoint (`/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct RestSubscriptionStore {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl RestSubscriptionStore {
    pub fn new(
        base_url: &Url,
        table: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(&format!("rest/v1/{table}"))
            .map_err(|e| StoreError::Backend(format!("invalid REST endpoint: {e}")))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubscriptionStore for RestSubscriptionStore {
    async fn insert(&self, request: &SubscriptionRequest) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .header(header::CONTENT_TYPE, "application/json")
            .json(&[request])
            .send()
            .await
            .map_err(|e| StoreError::Backend(format!("request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "subscription row inserted");
            return Ok(());
        }

        let body: RestErrorBody = response.json().await.unwrap_or_default();

        // 409 also covers other constraint failures; only a body without a
        // SQLSTATE falls back to the status.
        let duplicate = match body.code.as_deref() {
            Some(code) => code == UNIQUE_VIOLATION,
            None => status == StatusCode::CONFLICT,
        };
        if duplicate {
            return Err(StoreError::Duplicate);
        }

        Err(StoreError::Backend(format!(
            "insert rejected with {status}: {}",
            body.message.as_deref().unwrap_or("no message")
        )))
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}
