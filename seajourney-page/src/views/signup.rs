use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};
use seajourney_core::{Viewport, subscription::SubscriptionForm};

use crate::messages::Message;
use crate::theme::{Button, TextInput};

const FORM_MAX_WIDTH: f32 = 448.0;

/// Email field and call to action. Both are disabled while a write is in
/// flight.
pub fn view_signup(form: &SubscriptionForm, viewport: Viewport) -> Element<'_, Message> {
    let submitting = form.is_submitting();

    let input = text_input("Enter your email", form.input())
        .on_input_maybe((!submitting).then_some(Message::EmailChanged))
        .on_submit_maybe((!submitting).then_some(Message::Submit))
        .padding([12, 16])
        .size(16)
        .style(TextInput::style())
        .width(Length::Fill);

    let submit = button(
        text(if submitting { "Subscribing..." } else { "Get Notified" }).size(16),
    )
    .on_press_maybe((!submitting).then_some(Message::Submit))
    .padding([12, 24])
    .style(Button::Primary.style());

    let form: Element<'_, Message> = if viewport == Viewport::Compact {
        column![input, submit.width(Length::Fill)].spacing(16).into()
    } else {
        row![input, submit].spacing(16).into()
    };

    container(form).max_width(FORM_MAX_WIDTH).into()
}
