pub mod sources;

use std::{fmt, path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Effective configuration after file, `.env` and environment composition.
#[derive(Debug, Clone)]
pub struct Config {
    pub launch: LaunchConfig,
    pub countdown: CountdownConfig,
    pub carousel: CarouselConfig,
    pub subscriptions: SubscriptionConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Instant the countdown counts down to.
    pub target: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownConfig {
    pub tick: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Period of the automatic advance.
    pub interval: Duration,
    /// Slide override. `None` keeps the built-in catalog.
    pub slides: Option<Vec<SlideSpec>>,
}

/// One carousel entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlideSpec {
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    /// Table (or REST collection) receiving the inserts.
    pub table: String,
    /// Upper bound on a single write.
    pub submit_timeout: Duration,
    pub store: StoreConfig,
}

/// Backend receiving subscription inserts.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres { url: String },
    Rest { base_url: Url, api_key: String },
    Memory,
}

impl StoreConfig {
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Postgres { .. } => StoreKind::Postgres,
            Self::Rest { .. } => StoreKind::Rest,
            Self::Memory => StoreKind::Memory,
        }
    }
}

// Connection strings and API keys stay out of logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres { url } => f
                .debug_struct("Postgres")
                .field("url", &redact_url(url))
                .finish(),
            Self::Rest { base_url, .. } => f
                .debug_struct("Rest")
                .field("base_url", &base_url.as_str())
                .field("api_key", &"<redacted>")
                .finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("redacted"));
            url.to_string()
        }
        Ok(url) => url.to_string(),
        Err(_) => "<unparsable>".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Postgres,
    Rest,
    Memory,
}

impl StoreKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "rest" => Some(Self::Rest),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Postgres => "postgres",
            Self::Rest => "rest",
            Self::Memory => "memory",
        })
    }
}

/// Where the effective values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
    /// The store was picked from available credentials rather than named.
    pub store_inferred: bool,
}
