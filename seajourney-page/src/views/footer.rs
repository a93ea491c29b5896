use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use seajourney_core::{
    Viewport,
    catalog::{self, SocialKind},
};

use crate::messages::Message;
use crate::theme::{Button, SeaJourneyTheme, lucide_font};

fn icon_for(kind: SocialKind) -> Icon {
    match kind {
        SocialKind::Facebook => Icon::Facebook,
        SocialKind::Instagram => Icon::Instagram,
        SocialKind::Youtube => Icon::Youtube,
        SocialKind::Mail => Icon::Mail,
    }
}

pub fn view_footer<'a>(viewport: Viewport) -> Element<'a, Message> {
    let copyright = text(catalog::COPYRIGHT)
        .size(14)
        .color(SeaJourneyTheme::TEXT_MUTED);

    let links = catalog::social_links()
        .into_iter()
        .fold(row![].spacing(24), |row, link| {
            row.push(
                button(
                    text(icon_for(link.kind).unicode().to_string())
                        .font(lucide_font())
                        .size(24),
                )
                .on_press(Message::OpenLink(link.href))
                .padding(0)
                .style(Button::Link.style()),
            )
        });

    let layout: Element<'a, Message> = if viewport == Viewport::Compact {
        column![copyright, links]
            .spacing(16)
            .align_x(Alignment::Center)
            .into()
    } else {
        row![container(copyright).width(Length::Fill), links]
            .align_y(Alignment::Center)
            .into()
    };

    container(layout).max_width(896).padding([24, 16]).into()
}
