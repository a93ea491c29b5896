//! Soft configuration findings that do not stop start-up.

use chrono::{DateTime, Utc};

use crate::models::{Config, StoreKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigWarning {
    fn new(message: impl Into<String>, hint: Option<&str>) -> Self {
        Self {
            message: message.into(),
            hint: hint.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Collect warnings for an otherwise valid configuration, judged at `now`.
pub fn collect_warnings(config: &Config, now: DateTime<Utc>) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.launch.target <= now {
        warnings.push(ConfigWarning::new(
            format!(
                "launch instant {} has already passed; the countdown will show zeros",
                config.launch.target.to_rfc3339()
            ),
            Some("set SEAJOURNEY_LAUNCH_AT or [launch].target"),
        ));
    }

    if config.subscriptions.store.kind() == StoreKind::Memory {
        let hint = if config.metadata.store_inferred {
            Some("set DATABASE_URL or SEAJOURNEY_REST_URL to persist subscriptions")
        } else {
            None
        };
        warnings.push(ConfigWarning::new(
            "subscriptions are kept in memory and lost on exit",
            hint,
        ));
    }

    if config.countdown.tick > config.carousel.interval {
        warnings.push(ConfigWarning::new(
            "countdown tick is slower than the carousel interval",
            None,
        ));
    }

    warnings
}
