use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::non_empty_var;

use super::SlideSpec;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub launch: FileLaunchConfig,
    #[serde(default)]
    pub countdown: FileCountdownConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub subscriptions: FileSubscriptionConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub rest: FileRestConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLaunchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCountdownConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<SlideSpec>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSubscriptionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileRestConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub launch_at: Option<String>,
    pub countdown_tick: Option<String>,
    pub carousel_interval: Option<String>,
    pub submit_timeout: Option<String>,
    pub store: Option<String>,
    pub subscriptions_table: Option<String>,
    pub database_url: Option<String>,
    pub database_url_file: Option<PathBuf>,
    pub database_host: Option<String>,
    pub database_port: Option<u16>,
    pub database_user: Option<String>,
    pub database_name: Option<String>,
    pub database_password: Option<String>,
    pub database_password_file: Option<PathBuf>,
    pub rest_url: Option<String>,
    pub rest_key: Option<String>,
    pub rest_key_file: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("SEAJOURNEY_CONFIG_PATH")
                .map(PathBuf::from),
            launch_at: non_empty_var("SEAJOURNEY_LAUNCH_AT"),
            countdown_tick: non_empty_var("SEAJOURNEY_COUNTDOWN_TICK"),
            carousel_interval: non_empty_var("SEAJOURNEY_CAROUSEL_INTERVAL"),
            submit_timeout: non_empty_var("SEAJOURNEY_SUBMIT_TIMEOUT"),
            store: non_empty_var("SEAJOURNEY_STORE"),
            subscriptions_table: non_empty_var("SUBSCRIPTIONS_TABLE"),
            database_url: non_empty_var("DATABASE_URL"),
            database_url_file: non_empty_var("DATABASE_URL_FILE")
                .map(PathBuf::from),
            database_host: non_empty_var("DATABASE_HOST"),
            database_port: non_empty_var("DATABASE_PORT")
                .and_then(|s| s.parse().ok()),
            database_user: non_empty_var("DATABASE_USER"),
            database_name: non_empty_var("DATABASE_NAME"),
            database_password: non_empty_var("DATABASE_PASSWORD"),
            database_password_file: non_empty_var("DATABASE_PASSWORD_FILE")
                .map(PathBuf::from),
            rest_url: non_empty_var("SEAJOURNEY_REST_URL"),
            rest_key: non_empty_var("SEAJOURNEY_REST_KEY"),
            rest_key_file: non_empty_var("SEAJOURNEY_REST_KEY_FILE")
                .map(PathBuf::from),
        }
    }
}
