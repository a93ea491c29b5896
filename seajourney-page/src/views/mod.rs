//! Root-level view composition

pub mod carousel;
pub mod footer;
pub mod hero;
pub mod signup;
pub mod toasts;

use iced::widget::{Space, Stack, column, container, image, scrollable};
use iced::{ContentFit, Element, Length};
use seajourney_core::catalog;

use crate::messages::Message;
use crate::state::State;
use crate::theme::Container;

pub fn view(state: &State, _window: iced::window::Id) -> Element<'_, Message> {
    let content = column![
        hero::view_header(state.viewport()),
        hero::view_countdown(state.page.countdown(), state.viewport()),
        signup::view_signup(state.page.form(), state.viewport()),
        carousel::view_carousel(state),
        Space::new().height(Length::Fixed(24.0)),
        footer::view_footer(state.viewport()),
    ]
    .spacing(32)
    .padding(24)
    .width(Length::Fill)
    .align_x(iced::Alignment::Center);

    Stack::new()
        .push(view_backdrop(state))
        .push(
            container(scrollable(content))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(Container::Scrim.style()),
        )
        .push(toasts::view_toasts(state.page.notices()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_backdrop(state: &State) -> Element<'_, Message> {
    match state.images.get(catalog::HERO_IMAGE_URL) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(Space::new().width(Length::Fill).height(Length::Fill))
            .style(Container::Backdrop.style())
            .into(),
    }
}
