use std::{collections::HashSet, fmt, time::Duration};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::email::SubscriberEmail;

/// Payload of one subscription write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub email: SubscriberEmail,
}

/// Failure of a subscription write.
///
/// Cloneable so it can travel inside UI messages; backend failures are
/// captured as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected the insert on its uniqueness constraint.
    #[error("email is already subscribed")]
    Duplicate,

    #[error("subscription write timed out after {0:?}")]
    Timeout(Duration),

    #[error("subscription store error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Destination of subscription inserts.
#[async_trait]
pub trait SubscriptionStore: Send + Sync + fmt::Debug {
    /// Insert one record. A uniqueness conflict must surface as
    /// [`StoreError::Duplicate`].
    async fn insert(&self, request: &SubscriptionRequest) -> Result<(), StoreError>;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

/// Run one insert, bounded by `timeout`.
#[tracing::instrument(
    name = "subscription.insert",
    skip(store, request),
    fields(store = store.name(), email_domain = request.email.domain())
)]
pub async fn insert_with_timeout(
    store: &dyn SubscriptionStore,
    request: &SubscriptionRequest,
    timeout: Duration,
) -> Result<(), StoreError> {
    match tokio::time::timeout(timeout, store.insert(request)).await {
        Ok(Ok(())) => {
            info!("subscription stored");
            Ok(())
        }
        Ok(Err(StoreError::Duplicate)) => {
            info!("email already subscribed");
            Err(StoreError::Duplicate)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "subscription write failed");
            Err(err)
        }
        Err(_) => {
            warn!(?timeout, "subscription write timed out");
            Err(StoreError::Timeout(timeout))
        }
    }
}

/// Process-local store with the same uniqueness rule as the hosted table.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStore {
    emails: Mutex<HashSet<String>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.emails.lock().await.contains(email)
    }

    pub async fn len(&self) -> usize {
        self.emails.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.emails.lock().await.is_empty()
    }
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    async fn insert(&self, request: &SubscriptionRequest) -> Result<(), StoreError> {
        let mut emails = self.emails.lock().await;
        if emails.insert(request.email.as_str().to_string()) {
            Ok(())
        } else {
            Err(StoreError::Duplicate)
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &str) -> SubscriptionRequest {
        SubscriptionRequest {
            email: SubscriberEmail::parse(raw).unwrap(),
        }
    }

    #[derive(Debug)]
    struct StalledStore;

    #[async_trait]
    impl SubscriptionStore for StalledStore {
        async fn insert(&self, _request: &SubscriptionRequest) -> Result<(), StoreError> {
            std::future::pending().await
        }

        fn name(&self) -> &'static str {
            "stalled"
        }
    }

    #[tokio::test]
    async fn memory_store_rejects_second_insert() {
        let store = InMemorySubscriptionStore::new();
        assert_eq!(store.insert(&request("a@example.com")).await, Ok(()));
        assert_eq!(
            store.insert(&request("a@example.com")).await,
            Err(StoreError::Duplicate)
        );
        assert_eq!(store.insert(&request("b@example.com")).await, Ok(()));
        assert_eq!(store.len().await, 2);
        assert!(store.contains("a@example.com").await);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_write_times_out() {
        let result =
            insert_with_timeout(&StalledStore, &request("a@example.com"), Duration::from_secs(10))
                .await;
        assert_eq!(result, Err(StoreError::Timeout(Duration::from_secs(10))));
    }

    #[tokio::test]
    async fn duplicate_passes_through_timeout_wrapper() {
        let store = InMemorySubscriptionStore::new();
        store.insert(&request("a@example.com")).await.unwrap();
        let result =
            insert_with_timeout(&store, &request("a@example.com"), Duration::from_secs(1)).await;
        assert!(result.unwrap_err().is_duplicate());
    }
}
