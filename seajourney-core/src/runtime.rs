//! Headless driver for [`LandingPage`].
//!
//! One task owns the page. It multiplexes the countdown and carousel timers,
//! user actions and completed background work, and publishes a
//! [`PageSnapshot`] after every event. Cancelling the token (or dropping the
//! [`PageHandle`]) stops both timers and aborts outstanding writes and
//! dismissals.

use std::{fmt, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use seajourney_config::Config;
use thiserror::Error;
use tokio::{
    sync::{mpsc, watch},
    task::{JoinError, JoinHandle, JoinSet},
    time::{Instant, MissedTickBehavior, interval_at},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    carousel::Viewport,
    page::{LandingPage, PageCommand, PageEvent, PageSnapshot},
    subscription::{StoreError, SubscriptionStore, insert_with_timeout},
};

const ACTION_BUFFER: usize = 32;

/// Source of wall-clock time for countdown ticks.
pub trait Clock: Send + Sync + fmt::Debug + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub countdown_tick: Duration,
    pub carousel_interval: Duration,
    pub submit_timeout: Duration,
    /// Viewport used when computing the visible slide window.
    pub viewport: Viewport,
}

impl RuntimeSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            countdown_tick: config.countdown.tick,
            carousel_interval: config.carousel.interval,
            submit_timeout: config.subscriptions.submit_timeout,
            viewport: Viewport::default(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Input a visitor can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Next,
    Previous,
    JumpTo(usize),
    EmailChanged(String),
    Submit,
}

impl UserAction {
    /// Name for logs; never includes the typed email.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::JumpTo(_) => "jump_to",
            Self::EmailChanged(_) => "email_changed",
            Self::Submit => "submit",
        }
    }
}

impl From<UserAction> for PageEvent {
    fn from(action: UserAction) -> Self {
        match action {
            UserAction::Next => PageEvent::NextSlide,
            UserAction::Previous => PageEvent::PreviousSlide,
            UserAction::JumpTo(index) => PageEvent::JumpToSlide(index),
            UserAction::EmailChanged(value) => PageEvent::EmailChanged(value),
            UserAction::Submit => PageEvent::Submit,
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("page runtime has stopped")]
    Stopped,

    #[error("page runtime task failed: {0}")]
    Join(#[from] JoinError),
}

/// Owner-side handle to a running page.
#[derive(Debug)]
pub struct PageHandle {
    actions: mpsc::Sender<UserAction>,
    snapshots: watch::Receiver<PageSnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PageHandle {
    pub async fn send(&self, action: UserAction) -> Result<(), RuntimeError> {
        self.actions
            .send(action)
            .await
            .map_err(|_| RuntimeError::Stopped)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PageSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PageSnapshot> {
        self.snapshots.clone()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop the timers and wait for the page task to exit.
    pub async fn shutdown(mut self) -> Result<(), RuntimeError> {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await?;
        }
        Ok(())
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start driving `page` on the current tokio runtime.
pub fn spawn(
    page: LandingPage,
    store: Arc<dyn SubscriptionStore>,
    settings: RuntimeSettings,
    clock: Arc<dyn Clock>,
) -> PageHandle {
    let (actions_tx, actions_rx) = mpsc::channel(ACTION_BUFFER);
    let (snapshots_tx, snapshots_rx) = watch::channel(page.snapshot(settings.viewport));
    let cancel = CancellationToken::new();

    let task = tokio::spawn(run(
        page,
        store,
        settings,
        clock,
        actions_rx,
        snapshots_tx,
        cancel.clone(),
    ));

    PageHandle {
        actions: actions_tx,
        snapshots: snapshots_rx,
        cancel,
        task: Some(task),
    }
}

async fn run(
    mut page: LandingPage,
    store: Arc<dyn SubscriptionStore>,
    settings: RuntimeSettings,
    clock: Arc<dyn Clock>,
    mut actions: mpsc::Receiver<UserAction>,
    snapshots: watch::Sender<PageSnapshot>,
    cancel: CancellationToken,
) {
    let start = Instant::now();
    let mut countdown = interval_at(start + settings.countdown_tick, settings.countdown_tick);
    countdown.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut carousel =
        interval_at(start + settings.carousel_interval, settings.carousel_interval);
    carousel.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut countdown_active = !page.countdown().is_finished();
    let (events_tx, mut events) = mpsc::unbounded_channel::<PageEvent>();
    // Dropped with the loop, which aborts pending writes and dismissals.
    let mut background = JoinSet::new();

    info!(
        store = store.name(),
        slides = page.carousel().len(),
        countdown_active,
        "page runtime started"
    );

    loop {
        let event = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            Some(event) = events.recv() => event,
            _ = countdown.tick(), if countdown_active => PageEvent::CountdownTick(clock.now()),
            _ = carousel.tick() => PageEvent::AutoAdvance,
            action = actions.recv() => match action {
                Some(action) => {
                    debug!(action = action.label(), "user action");
                    action.into()
                }
                None => break,
            },
            Some(joined) = background.join_next(), if !background.is_empty() => match joined {
                // Dismissal timers cannot panic, so a panicked task while
                // submitting is the write.
                Err(err) if err.is_panic() && page.form().is_submitting() => {
                    error!(%err, "subscription write panicked");
                    PageEvent::SubmissionFinished(Err(StoreError::Backend(
                        "subscription write panicked".to_string(),
                    )))
                }
                _ => continue,
            },
        };

        match page.update(event) {
            Some(PageCommand::Submit(request)) => {
                let store = Arc::clone(&store);
                let events_tx = events_tx.clone();
                let timeout = settings.submit_timeout;
                background.spawn(async move {
                    let result = insert_with_timeout(store.as_ref(), &request, timeout).await;
                    let _ = events_tx.send(PageEvent::SubmissionFinished(result));
                });
            }
            Some(PageCommand::ScheduleDismiss { id, after }) => {
                let events_tx = events_tx.clone();
                background.spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = events_tx.send(PageEvent::DismissNotice(id));
                });
            }
            Some(PageCommand::StopCountdown) => countdown_active = false,
            None => {}
        }

        snapshots.send_replace(page.snapshot(settings.viewport));
    }

    info!("page runtime stopped");
}
