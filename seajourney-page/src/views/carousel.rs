use iced::widget::{Space, Stack, button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use lucide_icons::Icon;
use seajourney_core::carousel::Slide;

use crate::images::ImageState;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{Button, Container, SeaJourneyTheme, lucide_font};

const SLIDE_MAX_WIDTH: f32 = 400.0;
const SLIDE_HEIGHT: f32 = 300.0;

pub fn view_carousel(state: &State) -> Element<'_, Message> {
    let carousel = state.page.carousel();

    let slides = carousel
        .visible_for(state.viewport())
        .fold(row![].spacing(32), |row, (_, slide)| {
            row.push(view_slide(state, slide))
        })
        .align_y(Alignment::Center);

    let controls = row![
        chevron(Icon::ChevronLeft, Message::PreviousSlide),
        container(slides).center_x(Length::Fill),
        chevron(Icon::ChevronRight, Message::NextSlide),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    column![controls, view_indicators(carousel.len(), carousel.current_index())]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn view_slide<'a>(state: &'a State, slide: &'a Slide) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.images.state(&slide.image_url) {
        Some(ImageState::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(ImageState::Failed) => container(
            text("Image unavailable").color(SeaJourneyTheme::TEXT_PLACEHOLDER),
        )
        .center(Length::Fill)
        .into(),
        _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let caption = container(text(&slide.caption).size(14))
        .padding(16)
        .width(Length::Fill)
        .style(Container::Caption.style());

    container(
        Stack::new()
            .push(picture)
            .push(
                container(caption)
                    .height(Length::Fill)
                    .align_y(iced::alignment::Vertical::Bottom),
            ),
    )
    .width(Length::Fill)
    .max_width(SLIDE_MAX_WIDTH)
    .height(Length::Fixed(SLIDE_HEIGHT))
    .clip(true)
    .style(Container::Slide.style())
    .into()
}

fn chevron<'a>(icon: Icon, message: Message) -> Element<'a, Message> {
    button(text(icon.unicode().to_string()).font(lucide_font()).size(24))
        .on_press(message)
        .padding(8)
        .style(Button::Chevron.style())
        .into()
}

fn view_indicators<'a>(len: usize, current: usize) -> Element<'a, Message> {
    (0..len)
        .fold(row![].spacing(8), |row, index| {
            let active = index == current;
            row.push(
                button(Space::new())
                    .on_press(Message::JumpToSlide(index))
                    .width(Length::Fixed(if active { 16.0 } else { 8.0 }))
                    .height(Length::Fixed(8.0))
                    .padding(0)
                    .style(Button::Indicator { active }.style()),
            )
        })
        .into()
}
