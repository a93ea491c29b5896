use std::sync::Arc;

use iced::Size;
use iced::widget::image::Handle;
use seajourney_core::subscription::{StoreError, SubscriptionStore};

#[derive(Debug, Clone)]
pub enum Message {
    /// Boot finished building the subscription store.
    StoreReady(Result<Arc<dyn SubscriptionStore>, StoreError>),

    // Timers
    CountdownTick,
    AutoAdvance,

    // Carousel controls
    NextSlide,
    PreviousSlide,
    JumpToSlide(usize),

    // Signup form
    EmailChanged(String),
    Submit,
    SubmissionFinished(Result<(), StoreError>),

    DismissNotice(u64),
    /// Footer link pressed.
    OpenLink(String),
    LinkOpened(Result<(), String>),
    ImageLoaded(String, Result<Handle, String>),
    WindowResized(Size),
    NoOp,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StoreReady(_) => "StoreReady",
            Self::CountdownTick => "CountdownTick",
            Self::AutoAdvance => "AutoAdvance",
            Self::NextSlide => "NextSlide",
            Self::PreviousSlide => "PreviousSlide",
            Self::JumpToSlide(_) => "JumpToSlide",
            Self::EmailChanged(_) => "EmailChanged",
            Self::Submit => "Submit",
            Self::SubmissionFinished(_) => "SubmissionFinished",
            Self::DismissNotice(_) => "DismissNotice",
            Self::OpenLink(_) => "OpenLink",
            Self::LinkOpened(_) => "LinkOpened",
            Self::ImageLoaded(_, _) => "ImageLoaded",
            Self::WindowResized(_) => "WindowResized",
            Self::NoOp => "NoOp",
        }
    }
}
