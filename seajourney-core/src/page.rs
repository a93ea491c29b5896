//! The landing page: countdown, carousel and subscription form behind one
//! message-driven update function.
//!
//! Drivers (the desktop page, the headless runtime) own the timers and the
//! outbound write. They feed [`PageEvent`]s in and carry out the
//! [`PageCommand`] that comes back, if any.

use std::time::Duration;

use chrono::{DateTime, Utc};
use seajourney_config::Config;
use serde::Serialize;
use tracing::debug;

use crate::{
    carousel::{Carousel, CarouselError, Slide, Viewport},
    catalog,
    countdown::{Countdown, CountdownRemaining, CountdownTick},
    notice::{Notice, NoticeKind, Notices},
    subscription::{FormPhase, StoreError, SubscriptionForm, SubscriptionRequest},
};

#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Periodic countdown refresh with the current wall-clock time.
    CountdownTick(DateTime<Utc>),
    /// Periodic carousel advance.
    AutoAdvance,
    NextSlide,
    PreviousSlide,
    JumpToSlide(usize),
    EmailChanged(String),
    Submit,
    SubmissionFinished(Result<(), StoreError>),
    DismissNotice(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Perform the single outbound write for this submission.
    Submit(SubscriptionRequest),
    /// Dismiss notice `id` once `after` has elapsed.
    ScheduleDismiss { id: u64, after: Duration },
    /// The countdown reached the target; its timer can be dropped.
    StopCountdown,
}

#[derive(Debug, Clone)]
pub struct LandingPage {
    countdown: Countdown,
    carousel: Carousel,
    form: SubscriptionForm,
    notices: Notices,
}

impl LandingPage {
    pub fn new(
        target: DateTime<Utc>,
        now: DateTime<Utc>,
        slides: Vec<Slide>,
    ) -> Result<Self, CarouselError> {
        Ok(Self {
            countdown: Countdown::starting_at(target, now),
            carousel: Carousel::new(slides)?,
            form: SubscriptionForm::new(),
            notices: Notices::new(),
        })
    }

    /// Build the page from loaded configuration, falling back to the built-in
    /// slide catalog.
    pub fn from_config(
        config: &Config,
        now: DateTime<Utc>,
    ) -> Result<Self, CarouselError> {
        let slides = match &config.carousel.slides {
            Some(specs) => specs
                .iter()
                .map(|spec| Slide::new(spec.image_url.clone(), spec.caption.clone()))
                .collect(),
            None => catalog::default_slides(),
        };
        Self::new(config.launch.target, now, slides)
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn form(&self) -> &SubscriptionForm {
        &self.form
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn update(&mut self, event: PageEvent) -> Option<PageCommand> {
        match event {
            PageEvent::CountdownTick(now) => match self.countdown.tick(now)? {
                CountdownTick::Running(_) => None,
                CountdownTick::Finished => Some(PageCommand::StopCountdown),
            },
            PageEvent::AutoAdvance | PageEvent::NextSlide => {
                self.carousel.advance();
                None
            }
            PageEvent::PreviousSlide => {
                self.carousel.retreat();
                None
            }
            PageEvent::JumpToSlide(index) => {
                if let Err(err) = self.carousel.jump_to(index) {
                    debug!(%err, "ignoring slide jump");
                }
                None
            }
            PageEvent::EmailChanged(value) => {
                self.form.set_input(value);
                None
            }
            PageEvent::Submit => match self.form.begin_submit() {
                Ok(request) => Some(PageCommand::Submit(request)),
                Err(rejection) => {
                    let (kind, message) = rejection.notice()?;
                    Some(self.notify(kind, message))
                }
            },
            PageEvent::SubmissionFinished(result) => {
                let (kind, message) = self.form.complete(&result);
                Some(self.notify(kind, message))
            }
            PageEvent::DismissNotice(id) => {
                self.notices.dismiss(id);
                None
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) -> PageCommand {
        let id = self.notices.push(kind, message);
        PageCommand::ScheduleDismiss {
            id,
            after: kind.lifetime(),
        }
    }

    pub fn snapshot(&self, viewport: Viewport) -> PageSnapshot {
        PageSnapshot {
            remaining: self.countdown.remaining(),
            countdown_finished: self.countdown.is_finished(),
            current_slide: self.carousel.current_index(),
            slide_count: self.carousel.len(),
            visible_slides: self
                .carousel
                .visible_for(viewport)
                .map(|(index, _)| index)
                .collect(),
            caption: self.carousel.current().caption.clone(),
            email: self.form.input().to_string(),
            phase: self.form.phase(),
            notices: self.notices.iter().cloned().collect(),
        }
    }
}

/// Read-only view of the page after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub remaining: CountdownRemaining,
    pub countdown_finished: bool,
    pub current_slide: usize,
    pub slide_count: usize,
    pub visible_slides: Vec<usize>,
    pub caption: String,
    pub email: String,
    pub phase: FormPhase,
    pub notices: Vec<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::form::{MSG_DUPLICATE, MSG_EMPTY, MSG_SUBSCRIBED};
    use chrono::TimeZone;

    fn page() -> LandingPage {
        let target = Utc.with_ymd_and_hms(2025, 9, 18, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 9, 17, 23, 0, 0).unwrap();
        LandingPage::new(
            target,
            now,
            vec![
                Slide::new("a.jpg", "A"),
                Slide::new("b.jpg", "B"),
                Slide::new("c.jpg", "C"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn mount_computes_remaining_immediately() {
        let page = page();
        assert_eq!(page.countdown().remaining().hours, 1);
        assert_eq!(page.snapshot(Viewport::Compact).visible_slides, vec![0]);
    }

    #[test]
    fn countdown_past_target_asks_to_stop_once() {
        let mut page = page();
        let after = Utc.with_ymd_and_hms(2025, 9, 18, 0, 0, 1).unwrap();
        assert_eq!(
            page.update(PageEvent::CountdownTick(after)),
            Some(PageCommand::StopCountdown)
        );
        assert_eq!(page.update(PageEvent::CountdownTick(after)), None);
        assert!(page.countdown().remaining().is_zero());
    }

    #[test]
    fn manual_and_automatic_navigation_share_the_index() {
        let mut page = page();
        page.update(PageEvent::PreviousSlide);
        assert_eq!(page.carousel().current_index(), 2);
        page.update(PageEvent::AutoAdvance);
        assert_eq!(page.carousel().current_index(), 0);
        page.update(PageEvent::JumpToSlide(1));
        page.update(PageEvent::JumpToSlide(7));
        assert_eq!(page.carousel().current_index(), 1);
        assert_eq!(page.snapshot(Viewport::Wide).visible_slides, vec![1, 2, 0]);
    }

    #[test]
    fn empty_submit_notifies_without_writing() {
        let mut page = page();
        let command = page.update(PageEvent::Submit);
        assert_eq!(
            command,
            Some(PageCommand::ScheduleDismiss {
                id: 0,
                after: NoticeKind::Error.lifetime()
            })
        );
        assert_eq!(page.form().phase(), FormPhase::Idle);
        assert_eq!(page.notices().latest().unwrap().message, MSG_EMPTY);
    }

    #[test]
    fn successful_submission_cycle() {
        let mut page = page();
        page.update(PageEvent::EmailChanged("traveller@example.com".into()));

        let Some(PageCommand::Submit(request)) = page.update(PageEvent::Submit) else {
            panic!("expected a write");
        };
        assert_eq!(request.email.as_str(), "traveller@example.com");
        assert_eq!(page.form().phase(), FormPhase::Submitting);

        // Double submit is swallowed.
        assert_eq!(page.update(PageEvent::Submit), None);

        let command = page.update(PageEvent::SubmissionFinished(Ok(())));
        let Some(PageCommand::ScheduleDismiss { id, after }) = command else {
            panic!("expected a notice");
        };
        assert_eq!(after, NoticeKind::Success.lifetime());
        assert_eq!(page.form().input(), "");
        assert_eq!(page.notices().latest().unwrap().message, MSG_SUBSCRIBED);

        page.update(PageEvent::DismissNotice(id));
        assert!(page.notices().is_empty());
    }

    #[test]
    fn duplicate_submission_keeps_email() {
        let mut page = page();
        page.update(PageEvent::EmailChanged("traveller@example.com".into()));
        page.update(PageEvent::Submit);
        page.update(PageEvent::SubmissionFinished(Err(StoreError::Duplicate)));

        let snapshot = page.snapshot(Viewport::Compact);
        assert_eq!(snapshot.email, "traveller@example.com");
        assert_eq!(snapshot.phase, FormPhase::Idle);
        assert_eq!(snapshot.notices.last().unwrap().message, MSG_DUPLICATE);
    }

    #[test]
    fn config_slides_override_catalog() {
        use seajourney_config::{
            ConfigLoader, ConfigMetadata, SlideSpec,
            models::sources::{EnvConfig, FileCarouselConfig, FileConfig},
        };

        let file = FileConfig {
            carousel: FileCarouselConfig {
                slides: Some(vec![SlideSpec {
                    image_url: "https://cdn.example.com/bagan.jpg".into(),
                    caption: "Balloons over Bagan".into(),
                }]),
                ..FileCarouselConfig::default()
            },
            ..FileConfig::default()
        };
        let config = ConfigLoader::compose(file, EnvConfig::default(), ConfigMetadata::default())
            .unwrap()
            .config;

        let page = LandingPage::from_config(&config, Utc::now()).unwrap();
        assert_eq!(page.carousel().len(), 1);
        assert_eq!(page.carousel().current().caption, "Balloons over Bagan");

        let default_config =
            ConfigLoader::compose(FileConfig::default(), EnvConfig::default(), ConfigMetadata::default())
                .unwrap()
                .config;
        let page = LandingPage::from_config(&default_config, Utc::now()).unwrap();
        assert_eq!(page.carousel().len(), catalog::default_slides().len());
    }
}
