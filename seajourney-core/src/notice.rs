//! Transient user-facing notices (toasts).

use std::{collections::VecDeque, time::Duration};

use serde::Serialize;

/// At most this many notices are kept; the oldest is dropped first.
pub const MAX_ACTIVE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// How long a notice of this kind stays on screen.
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    next_id: u64,
    active: VecDeque<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice and return its id; the caller schedules the dismissal
    /// after [`NoticeKind::lifetime`].
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.active.len() == MAX_ACTIVE {
            self.active.pop_front();
        }
        self.active.push_back(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns false when the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|notice| notice.id != id);
        self.active.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.active.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_once() {
        let mut notices = Notices::new();
        let a = notices.push(NoticeKind::Success, "one");
        let b = notices.push(NoticeKind::Error, "two");
        assert_ne!(a, b);

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        assert_eq!(notices.latest().map(|n| n.id), Some(b));
    }

    #[test]
    fn oldest_notice_is_evicted_past_capacity() {
        let mut notices = Notices::new();
        let first = notices.push(NoticeKind::Error, "first");
        for i in 0..MAX_ACTIVE {
            notices.push(NoticeKind::Error, format!("n{i}"));
        }
        assert_eq!(notices.len(), MAX_ACTIVE);
        assert!(notices.iter().all(|n| n.id != first));
    }

    #[test]
    fn errors_linger_longer_than_successes() {
        assert!(NoticeKind::Error.lifetime() > NoticeKind::Success.lifetime());
    }
}
