//! Root update: translate UI messages into page events and page commands
//! into tasks.

use chrono::Utc;
use iced::Task;
use seajourney_core::{
    page::{PageCommand, PageEvent},
    subscription::{StoreError, SubscriptionRequest, insert_with_timeout},
};

use crate::links;
use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update::{}", message.name());

    match message {
        Message::StoreReady(Ok(store)) => {
            log::info!("[Subscriptions] {} store ready", store.name());
            state.store = Some(store);
            Task::none()
        }
        Message::StoreReady(Err(err)) => {
            log::error!("[Subscriptions] Store unavailable: {}", err);
            Task::none()
        }
        Message::CountdownTick => drive(state, PageEvent::CountdownTick(Utc::now())),
        Message::AutoAdvance => drive(state, PageEvent::AutoAdvance),
        Message::NextSlide => drive(state, PageEvent::NextSlide),
        Message::PreviousSlide => drive(state, PageEvent::PreviousSlide),
        Message::JumpToSlide(index) => drive(state, PageEvent::JumpToSlide(index)),
        Message::EmailChanged(value) => drive(state, PageEvent::EmailChanged(value)),
        Message::Submit => drive(state, PageEvent::Submit),
        Message::SubmissionFinished(result) => {
            drive(state, PageEvent::SubmissionFinished(result))
        }
        Message::DismissNotice(id) => drive(state, PageEvent::DismissNotice(id)),
        Message::OpenLink(href) => {
            if links::is_placeholder(&href) {
                log::debug!("[Ui] Ignoring placeholder link {}", href);
                return Task::none();
            }
            Task::perform(async move { links::open(&href) }, Message::LinkOpened)
        }
        Message::LinkOpened(Ok(())) => Task::none(),
        Message::LinkOpened(Err(err)) => {
            log::warn!("[Ui] {}", err);
            Task::none()
        }
        Message::ImageLoaded(url, result) => {
            state.images.finish(url, result);
            Task::none()
        }
        Message::WindowResized(size) => {
            state.set_window_width(size.width);
            Task::none()
        }
        Message::NoOp => Task::none(),
    }
}

fn drive(state: &mut State, event: PageEvent) -> Task<Message> {
    match state.page.update(event) {
        Some(PageCommand::Submit(request)) => submit(state, request),
        Some(PageCommand::ScheduleDismiss { id, after }) => {
            Task::perform(tokio::time::sleep(after), move |()| {
                Message::DismissNotice(id)
            })
        }
        Some(PageCommand::StopCountdown) => {
            log::info!("[Countdown] Launch instant reached, countdown stopped");
            Task::none()
        }
        None => Task::none(),
    }
}

fn submit(state: &State, request: SubscriptionRequest) -> Task<Message> {
    let Some(store) = state.store.clone() else {
        log::warn!("[Subscriptions] Submit arrived before the store was ready");
        return Task::done(Message::SubmissionFinished(Err(StoreError::Backend(
            "subscription store unavailable".to_string(),
        ))));
    };

    let timeout = state.settings.submit_timeout;
    Task::perform(
        async move { insert_with_timeout(store.as_ref(), &request, timeout).await },
        Message::SubmissionFinished,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use seajourney_config::{
        ConfigLoader, ConfigMetadata,
        models::sources::{EnvConfig, FileConfig},
    };
    use seajourney_core::{
        Viewport,
        notice::NoticeKind,
        subscription::{
            FormPhase, InMemorySubscriptionStore,
            form::{MSG_EMPTY, MSG_RETRY},
        },
    };

    use super::*;
    use crate::app::{AppConfig, bootstrap::base_state};

    fn state() -> State {
        let config =
            ConfigLoader::compose(FileConfig::default(), EnvConfig::default(), ConfigMetadata::default())
                .unwrap()
                .config;
        base_state(&AppConfig::new(config).unwrap())
    }

    #[test]
    fn empty_submit_shows_error_notice() {
        let mut state = state();
        let _ = update(&mut state, Message::Submit);

        let notice = state.page.notices().latest().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, MSG_EMPTY);
        assert_eq!(state.page.form().phase(), FormPhase::Idle);
    }

    #[test]
    fn failure_returns_form_to_idle() {
        let mut state = state();
        state.store = Some(Arc::new(InMemorySubscriptionStore::new()));

        let _ = update(&mut state, Message::EmailChanged("traveller@example.com".into()));
        let _ = update(&mut state, Message::Submit);
        assert_eq!(state.page.form().phase(), FormPhase::Submitting);

        let _ = update(
            &mut state,
            Message::SubmissionFinished(Err(StoreError::Backend("boom".into()))),
        );
        assert_eq!(state.page.form().phase(), FormPhase::Idle);
        assert_eq!(state.page.notices().latest().unwrap().message, MSG_RETRY);
        assert_eq!(state.page.form().input(), "traveller@example.com");
    }

    #[test]
    fn carousel_messages_move_the_index() {
        let mut state = state();
        let _ = update(&mut state, Message::PreviousSlide);
        let last = state.page.carousel().len() - 1;
        assert_eq!(state.page.carousel().current_index(), last);
        let _ = update(&mut state, Message::AutoAdvance);
        assert_eq!(state.page.carousel().current_index(), 0);
        let _ = update(&mut state, Message::JumpToSlide(2));
        assert_eq!(state.page.carousel().current_index(), 2);
    }

    #[test]
    fn placeholder_and_failed_links_leave_the_page_alone() {
        let mut state = state();
        let _ = update(&mut state, Message::EmailChanged("traveller@example.com".into()));

        let _ = update(&mut state, Message::OpenLink("#".into()));
        let _ = update(
            &mut state,
            Message::LinkOpened(Err("failed to open mailto:info@seajourney.com".into())),
        );

        assert_eq!(state.page.form().input(), "traveller@example.com");
        assert!(state.page.notices().is_empty());
        assert_eq!(state.page.carousel().current_index(), 0);
    }

    #[test]
    fn resize_switches_viewport_at_breakpoints() {
        let mut state = state();
        assert_eq!(state.viewport(), Viewport::Wide);

        let _ = update(&mut state, Message::WindowResized(iced::Size::new(800.0, 900.0)));
        assert_eq!(state.viewport(), Viewport::Medium);
        let _ = update(&mut state, Message::WindowResized(iced::Size::new(500.0, 900.0)));
        assert_eq!(state.viewport(), Viewport::Compact);
        assert!(!state.set_window_width(420.0));
    }
}
