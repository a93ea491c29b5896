//! Defaults applied when neither the config file nor the environment sets a value.

use std::time::Duration;

/// Launch instant, interpreted in local time.
pub const DEFAULT_LAUNCH_AT: &str = "2025-09-18T00:00:00";

pub const DEFAULT_COUNTDOWN_TICK: Duration = Duration::from_secs(1);

pub const DEFAULT_CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);

pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_SUBSCRIPTIONS_TABLE: &str = "subscriptions";

/// Config file consulted when `SEAJOURNEY_CONFIG_PATH` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "seajourney.toml";

pub const DEFAULT_DATABASE_PORT: u16 = 5432;
