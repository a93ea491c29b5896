//! Subscription form state machine.
//!
//! ```text
//!   Idle --submit(valid)--> Submitting --complete(_)--> Idle
//!    ^  \--submit(invalid)--/ (notice, stays Idle)
//! ```

use serde::Serialize;

use super::{
    email::{SubscriberEmail, ValidationError},
    store::{StoreError, SubscriptionRequest},
};
use crate::notice::NoticeKind;

pub const MSG_EMPTY: &str = "Please enter your email address";
pub const MSG_MALFORMED: &str = "Please enter a valid email address";
pub const MSG_SUBSCRIBED: &str = "Thanks for subscribing!";
pub const MSG_DUPLICATE: &str = "This email is already subscribed!";
pub const MSG_RETRY: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a submit action did not start a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A write is already outstanding; the action is dropped silently.
    InFlight,
    Invalid(ValidationError),
}

impl SubmitRejection {
    /// Notice shown to the user, if any.
    pub fn notice(&self) -> Option<(NoticeKind, &'static str)> {
        match self {
            Self::InFlight => None,
            Self::Invalid(ValidationError::Empty) => Some((NoticeKind::Error, MSG_EMPTY)),
            Self::Invalid(ValidationError::Malformed(_)) => {
                Some((NoticeKind::Error, MSG_MALFORMED))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionForm {
    input: String,
    phase: FormPhase,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Replace the input text. Ignored while a write is outstanding.
    pub fn set_input(&mut self, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.input = value.into();
        true
    }

    /// Validate the input and, on success, enter `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SubscriptionRequest, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }
        let email = SubscriberEmail::parse(&self.input).map_err(SubmitRejection::Invalid)?;
        self.phase = FormPhase::Submitting;
        Ok(SubscriptionRequest { email })
    }

    /// Settle the outstanding write and return to `Idle`.
    ///
    /// Success clears the input; failures leave it for the user to retry.
    pub fn complete(&mut self, result: &Result<(), StoreError>) -> (NoticeKind, &'static str) {
        if !self.is_submitting() {
            tracing::warn!("subscription result arrived while idle");
        }
        self.phase = FormPhase::Idle;

        match result {
            Ok(()) => {
                self.input.clear();
                (NoticeKind::Success, MSG_SUBSCRIBED)
            }
            Err(StoreError::Duplicate) => (NoticeKind::Error, MSG_DUPLICATE),
            Err(StoreError::Timeout(_) | StoreError::Backend(_)) => (NoticeKind::Error, MSG_RETRY),
        }
    }
}
