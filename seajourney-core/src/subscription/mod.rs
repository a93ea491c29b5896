//! Email subscription: validation, form state, and the stores that receive
//! the single insert per submission.

pub mod email;
pub mod form;
#[cfg(feature = "database")]
pub mod postgres;
#[cfg(feature = "rest")]
pub mod rest;
pub mod store;

use std::sync::Arc;

use seajourney_config::{StoreConfig, SubscriptionConfig};

pub use email::{SubscriberEmail, ValidationError};
pub use form::{FormPhase, SubmitRejection, SubscriptionForm};
pub use store::{
    InMemorySubscriptionStore, StoreError, SubscriptionRequest,
    SubscriptionStore, insert_with_timeout,
};

/// Build the store selected by configuration.
///
/// Postgres pools connect lazily, so this never touches the network.
pub fn build_store(
    config: &SubscriptionConfig,
) -> Result<Arc<dyn SubscriptionStore>, StoreError> {
    match &config.store {
        #[cfg(feature = "database")]
        StoreConfig::Postgres { url } => Ok(Arc::new(
            postgres::PostgresSubscriptionStore::connect_lazy(url, &config.table)?,
        )),
        #[cfg(not(feature = "database"))]
        StoreConfig::Postgres { .. } => Err(StoreError::Backend(
            "built without the `database` feature".to_string(),
        )),
        #[cfg(feature = "rest")]
        StoreConfig::Rest { base_url, api_key } => Ok(Arc::new(
            rest::RestSubscriptionStore::new(base_url, &config.table, api_key.clone())?,
        )),
        #[cfg(not(feature = "rest"))]
        StoreConfig::Rest { .. } => Err(StoreError::Backend(
            "built without the `rest` feature".to_string(),
        )),
        StoreConfig::Memory => Ok(Arc::new(InMemorySubscriptionStore::new())),
    }
}
