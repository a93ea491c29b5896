use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use iced::Task;
use seajourney_config::{Config, ConfigLoader};
use seajourney_core::{
    Viewport, catalog, page::LandingPage, runtime::RuntimeSettings,
    subscription::build_store,
};

use crate::app::WINDOW_SIZE;
use crate::images;
use crate::messages::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub config: Arc<Config>,
    /// Page as of configuration load; the first countdown tick refreshes it.
    pub page: LandingPage,
}

impl AppConfig {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let page = LandingPage::from_config(&config, Utc::now())
            .context("failed to build the landing page")?;
        Ok(Self {
            config: Arc::new(config),
            page,
        })
    }

    /// Load configuration from `seajourney.toml`, `.env` and the process
    /// environment, logging any warnings.
    pub fn from_environment() -> anyhow::Result<Self> {
        let load = ConfigLoader::new()
            .load()
            .context("failed to load configuration")?;

        if load.config.metadata.env_file_loaded {
            log::info!("Loaded .env file");
        }
        for warning in &load.warnings.items {
            match &warning.hint {
                Some(hint) => log::warn!("Configuration: {} ({})", warning.message, hint),
                None => log::warn!("Configuration: {}", warning.message),
            }
        }

        Self::new(load.config)
    }

    pub fn settings(&self) -> RuntimeSettings {
        RuntimeSettings::from_config(&self.config)
            .with_viewport(Viewport::from_width(WINDOW_SIZE.width))
    }
}

/// Initial state without any boot tasks.
pub fn base_state(config: &AppConfig) -> State {
    State::new(config.page.clone(), config.settings(), WINDOW_SIZE.width)
}

/// Boot: build the store, refresh the countdown and start fetching images.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let mut state = base_state(config);

    let subscriptions = config.config.subscriptions.clone();
    let store_task = Task::perform(
        async move {
            log::info!(
                "[Subscriptions] Building {} store",
                subscriptions.store.kind()
            );
            build_store(&subscriptions)
        },
        Message::StoreReady,
    );

    let mut urls = vec![catalog::HERO_IMAGE_URL.to_string()];
    urls.extend(
        state
            .page
            .carousel()
            .slides()
            .iter()
            .map(|slide| slide.image_url.clone()),
    );
    let image_tasks = urls
        .into_iter()
        .filter(|url| state.images.begin(url))
        .map(|url| images::fetch_task(state.http.clone(), url));

    let mut tasks = vec![store_task, Task::done(Message::CountdownTick)];
    tasks.extend(image_tasks);

    (state, Task::batch(tasks))
}
