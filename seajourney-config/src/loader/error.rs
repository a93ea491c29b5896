use std::path::PathBuf;

use thiserror::Error;

/// Hard failures while composing the configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read secret file {path}: {source}")]
    SecretFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid duration for {key}: {value:?}")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("{key} must be greater than zero")]
    ZeroDuration { key: &'static str },

    #[error(
        "invalid launch instant {value:?}; expected RFC 3339 or YYYY-MM-DDTHH:MM:SS"
    )]
    InvalidLaunchInstant {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("carousel slide list is empty")]
    EmptySlides,

    #[error("carousel slide {index} has an empty {field}")]
    InvalidSlide { index: usize, field: &'static str },

    #[error("unknown subscription store {value:?}; expected postgres, rest or memory")]
    UnknownStore { value: String },

    #[error("subscriptions table name {value:?} is not a plain identifier")]
    InvalidTableName { value: String },

    #[error("postgres store selected but no database URL could be resolved")]
    MissingDatabaseUrl,

    #[error("invalid database URL: {source}")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },

    #[error("database username {username:?} cannot be encoded into a URL")]
    InvalidDatabaseUsername { username: String },

    #[error("database password cannot be encoded into a URL")]
    InvalidDatabasePassword,

    #[error("rest store selected but {missing} is not set")]
    MissingRestSetting { missing: &'static str },

    #[error("invalid rest base URL: {source}")]
    InvalidRestUrl {
        #[source]
        source: url::ParseError,
    },
}
