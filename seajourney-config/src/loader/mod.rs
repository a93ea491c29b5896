pub mod db_url;
pub mod error;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::Utc;
use tracing::debug;
use url::Url;

use crate::{
    constants::{
        DEFAULT_CAROUSEL_INTERVAL, DEFAULT_CONFIG_FILE, DEFAULT_COUNTDOWN_TICK,
        DEFAULT_LAUNCH_AT, DEFAULT_SUBMIT_TIMEOUT, DEFAULT_SUBSCRIPTIONS_TABLE,
    },
    models::{
        CarouselConfig, Config, ConfigMetadata, CountdownConfig, LaunchConfig,
        SlideSpec, StoreConfig, StoreKind, SubscriptionConfig,
        sources::{EnvConfig, FileConfig, FileRestConfig},
    },
    util::{parse_duration, parse_launch_instant, read_secret_file},
    validation::{ConfigWarnings, collect_warnings},
};

use error::ConfigLoadError;

/// Result of a successful load: the config plus non-fatal findings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

/// Composes file, `.env` and process environment into a [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    load_env_file: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            load_env_file: true,
        }
    }

    /// Read this TOML file instead of `SEAJOURNEY_CONFIG_PATH`/`seajourney.toml`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skip loading `.env` from the working directory.
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file && dotenvy::dotenv().is_ok();

        let env = EnvConfig::gather();

        let path = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone())
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.is_file().then_some(fallback)
            });

        let file = match path.as_deref() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let metadata = ConfigMetadata {
            config_path: path,
            env_file_loaded,
            store_inferred: false,
        };

        Self::compose(file, env, metadata)
    }

    /// Merge already-gathered sources. Environment values override the file.
    pub fn compose(
        file: FileConfig,
        env: EnvConfig,
        mut metadata: ConfigMetadata,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let target = parse_launch_instant(
            env.launch_at
                .as_deref()
                .or(file.launch.target.as_deref())
                .unwrap_or(DEFAULT_LAUNCH_AT),
        )?;

        let tick = pick_duration(
            "countdown tick",
            env.countdown_tick.as_deref(),
            file.countdown.tick.as_deref(),
            DEFAULT_COUNTDOWN_TICK,
        )?;
        let interval = pick_duration(
            "carousel interval",
            env.carousel_interval.as_deref(),
            file.carousel.interval.as_deref(),
            DEFAULT_CAROUSEL_INTERVAL,
        )?;
        let submit_timeout = pick_duration(
            "submit timeout",
            env.submit_timeout.as_deref(),
            file.subscriptions.submit_timeout.as_deref(),
            DEFAULT_SUBMIT_TIMEOUT,
        )?;

        let slides = match file.carousel.slides {
            Some(slides) => Some(validate_slides(slides)?),
            None => None,
        };

        let table = env
            .subscriptions_table
            .clone()
            .or(file.subscriptions.table.clone())
            .unwrap_or_else(|| DEFAULT_SUBSCRIPTIONS_TABLE.to_string());
        validate_table_name(&table)?;

        let requested = env
            .store
            .as_deref()
            .or(file.subscriptions.store.as_deref())
            .map(|raw| {
                StoreKind::parse(raw).ok_or_else(|| ConfigLoadError::UnknownStore {
                    value: raw.to_string(),
                })
            })
            .transpose()?;

        let database_url = db_url::resolve_database_url(&env, &file.database)?;
        let rest = resolve_rest(&env, &file.rest)?;

        let store = match requested {
            Some(StoreKind::Postgres) => StoreConfig::Postgres {
                url: database_url.ok_or(ConfigLoadError::MissingDatabaseUrl)?,
            },
            Some(StoreKind::Rest) => {
                let (base_url, api_key) = rest.require()?;
                StoreConfig::Rest { base_url, api_key }
            }
            Some(StoreKind::Memory) => StoreConfig::Memory,
            None => {
                metadata.store_inferred = true;
                if let Some(url) = database_url {
                    StoreConfig::Postgres { url }
                } else if let RestSettings {
                    base_url: Some(base_url),
                    api_key: Some(api_key),
                } = rest
                {
                    StoreConfig::Rest { base_url, api_key }
                } else {
                    StoreConfig::Memory
                }
            }
        };

        debug!(
            store = %store.kind(),
            inferred = metadata.store_inferred,
            "subscription store selected"
        );

        let config = Config {
            launch: LaunchConfig { target },
            countdown: CountdownConfig { tick },
            carousel: CarouselConfig { interval, slides },
            subscriptions: SubscriptionConfig {
                table,
                submit_timeout,
                store,
            },
            metadata,
        };

        let warnings = collect_warnings(&config, Utc::now());

        Ok(ConfigLoad { config, warnings })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn pick_duration(
    key: &'static str,
    env: Option<&str>,
    file: Option<&str>,
    default: Duration,
) -> Result<Duration, ConfigLoadError> {
    let value = match env.or(file) {
        Some(raw) => parse_duration(key, raw)?,
        None => default,
    };
    if value.is_zero() {
        return Err(ConfigLoadError::ZeroDuration { key });
    }
    Ok(value)
}

fn validate_slides(
    slides: Vec<SlideSpec>,
) -> Result<Vec<SlideSpec>, ConfigLoadError> {
    if slides.is_empty() {
        return Err(ConfigLoadError::EmptySlides);
    }
    for (index, slide) in slides.iter().enumerate() {
        if slide.image_url.trim().is_empty() {
            return Err(ConfigLoadError::InvalidSlide {
                index,
                field: "image_url",
            });
        }
        if slide.caption.trim().is_empty() {
            return Err(ConfigLoadError::InvalidSlide {
                index,
                field: "caption",
            });
        }
    }
    Ok(slides)
}

// The table name is spliced into SQL and REST paths.
fn validate_table_name(table: &str) -> Result<(), ConfigLoadError> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigLoadError::InvalidTableName {
            value: table.to_string(),
        })
    }
}

struct RestSettings {
    base_url: Option<Url>,
    api_key: Option<String>,
}

impl RestSettings {
    fn require(self) -> Result<(Url, String), ConfigLoadError> {
        let base_url = self.base_url.ok_or(ConfigLoadError::MissingRestSetting {
            missing: "SEAJOURNEY_REST_URL",
        })?;
        let api_key = self.api_key.ok_or(ConfigLoadError::MissingRestSetting {
            missing: "SEAJOURNEY_REST_KEY",
        })?;
        Ok((base_url, api_key))
    }
}

fn resolve_rest(
    env: &EnvConfig,
    file: &FileRestConfig,
) -> Result<RestSettings, ConfigLoadError> {
    let base_url = env
        .rest_url
        .as_deref()
        .or(file.url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|raw| {
            Url::parse(raw)
                .map_err(|source| ConfigLoadError::InvalidRestUrl { source })
        })
        .transpose()?;

    let mut api_key = env.rest_key.clone();
    if api_key.is_none()
        && let Some(path) = env.rest_key_file.as_ref()
    {
        api_key = read_secret_file(path)?;
    }
    if api_key.is_none() {
        api_key = file
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty());
    }
    if api_key.is_none()
        && let Some(path) = file.api_key_file.as_ref()
    {
        api_key = read_secret_file(path)?;
    }

    Ok(RestSettings { base_url, api_key })
}
