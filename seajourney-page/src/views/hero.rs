use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use seajourney_core::{Viewport, catalog, countdown::Countdown};

use crate::messages::Message;
use crate::theme::{SeaJourneyTheme, lucide_font};

pub fn view_header<'a>(viewport: Viewport) -> Element<'a, Message> {
    let compact = viewport == Viewport::Compact;

    column![
        Space::new().height(Length::Fixed(if compact { 24.0 } else { 72.0 })),
        text(Icon::Timer.unicode().to_string())
            .font(lucide_font())
            .size(if compact { 48 } else { 64 }),
        text(catalog::BRAND_NAME)
            .size(if compact { 36 } else { 60 })
            .color(SeaJourneyTheme::TEXT_PRIMARY),
        container(
            text(catalog::TAGLINE)
                .size(if compact { 20 } else { 24 })
                .align_x(iced::alignment::Horizontal::Center)
                .color(SeaJourneyTheme::TEXT_PRIMARY),
        )
        .max_width(672),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

pub fn view_countdown<'a>(countdown: &Countdown, viewport: Viewport) -> Element<'a, Message> {
    let remaining = countdown.remaining();
    let compact = viewport == Viewport::Compact;

    let cell = |value: u64, label: &'static str| {
        column![
            text(value.to_string()).size(if compact { 30 } else { 48 }),
            text(label)
                .size(if compact { 14 } else { 16 })
                .color(SeaJourneyTheme::TEXT_MUTED),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fixed(if compact { 64.0 } else { 96.0 }))
    };

    row![
        cell(remaining.days, "Days"),
        cell(remaining.hours, "Hours"),
        cell(remaining.minutes, "Minutes"),
        cell(remaining.seconds, "Seconds"),
    ]
    .spacing(if compact { 16 } else { 32 })
    .into()
}
