use std::sync::Arc;

use seajourney_core::{
    Viewport, page::LandingPage, runtime::RuntimeSettings, subscription::SubscriptionStore,
};

use crate::images::ImageCache;

#[derive(Debug)]
pub struct State {
    pub page: LandingPage,
    /// `None` until the boot task has built the store.
    pub store: Option<Arc<dyn SubscriptionStore>>,
    pub settings: RuntimeSettings,
    pub window_width: f32,
    pub images: ImageCache,
    pub http: reqwest::Client,
}

impl State {
    pub fn new(page: LandingPage, settings: RuntimeSettings, window_width: f32) -> Self {
        Self {
            page,
            store: None,
            settings: settings.with_viewport(Viewport::from_width(window_width)),
            window_width,
            images: ImageCache::default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.settings.viewport
    }

    /// Record a new window width. Returns true when the slide window changed.
    pub fn set_window_width(&mut self, width: f32) -> bool {
        self.window_width = width;
        let viewport = Viewport::from_width(width);
        if viewport == self.settings.viewport {
            return false;
        }
        log::debug!("[Ui] Viewport {:?} -> {:?}", self.settings.viewport, viewport);
        self.settings.viewport = viewport;
        true
    }

    pub fn countdown_active(&self) -> bool {
        !self.page.countdown().is_finished()
    }
}
