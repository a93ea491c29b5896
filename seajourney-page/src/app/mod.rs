use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, update, views};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Initial window size in logical pixels.
pub const WINDOW_SIZE: iced::Size = iced::Size::new(1280.0, 860.0);

/// Build the Sea Journey application from loaded configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>> {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        views::view,
    )
    .settings(default_settings())
    .title("Sea Journey")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: WINDOW_SIZE,
        min_size: Some(iced::Size::new(360.0, 640.0)),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("seajourney".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    crate::theme::SeaJourneyTheme::theme()
}
