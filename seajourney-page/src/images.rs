//! Remote image fetching for the hero backdrop and slides.

use std::collections::HashMap;

use iced::Task;
use iced::widget::image::Handle;

use crate::messages::Message;

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

/// Images keyed by source URL. Slides that repeat share one entry.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    /// Mark `url` as loading. Returns false when it is already known, so the
    /// caller does not fetch it twice.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), ImageState::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Handle, String>) {
        let state = match result {
            Ok(handle) => ImageState::Ready(handle),
            Err(err) => {
                log::warn!("[Images] Failed to load {}: {}", url, err);
                ImageState::Failed
            }
        };
        self.entries.insert(url, state);
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        match self.entries.get(url) {
            Some(ImageState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }
}

pub async fn fetch(client: reqwest::Client, url: String) -> Result<Vec<u8>, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}: {}", response.status(), url));
    }

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

pub fn fetch_task(client: reqwest::Client, url: String) -> Task<Message> {
    let key = url.clone();
    Task::perform(fetch(client, url), move |result| {
        Message::ImageLoaded(key, result.map(Handle::from_bytes))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_urls_are_fetched_once() {
        let mut cache = ImageCache::default();
        assert!(cache.begin("https://cdn.example.com/a.jpg"));
        assert!(!cache.begin("https://cdn.example.com/a.jpg"));
        assert!(matches!(
            cache.state("https://cdn.example.com/a.jpg"),
            Some(ImageState::Loading)
        ));
    }

    #[test]
    fn failures_leave_no_handle() {
        let mut cache = ImageCache::default();
        cache.begin("https://cdn.example.com/a.jpg");
        cache.finish("https://cdn.example.com/a.jpg".into(), Err("HTTP 404".into()));
        assert!(cache.get("https://cdn.example.com/a.jpg").is_none());

        cache.finish(
            "https://cdn.example.com/b.jpg".into(),
            Ok(Handle::from_bytes(vec![0u8; 4])),
        );
        assert!(cache.get("https://cdn.example.com/b.jpg").is_some());
    }
}
