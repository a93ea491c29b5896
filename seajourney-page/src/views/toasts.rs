use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use seajourney_core::notice::{NoticeKind, Notices};

use crate::messages::Message;
use crate::theme::{Container, SeaJourneyTheme, lucide_font};

/// Notices stacked at the top centre, newest last.
pub fn view_toasts(notices: &Notices) -> Element<'_, Message> {
    let stack = notices.iter().fold(column![].spacing(8), |column, notice| {
        let (icon, color) = match notice.kind {
            NoticeKind::Success => (Icon::Check, SeaJourneyTheme::SUCCESS),
            NoticeKind::Error => (Icon::CircleX, SeaJourneyTheme::ERROR),
        };
        column.push(
            container(
                row![
                    text(icon.unicode().to_string())
                        .font(lucide_font())
                        .size(18)
                        .color(color),
                    text(&notice.message).size(15),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding([10, 14])
            .style(Container::Toast.style()),
        )
    });

    container(stack.align_x(Alignment::Center))
        .padding(16)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}
