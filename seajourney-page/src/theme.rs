use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container, text_input},
};

/// Light-on-photo palette: white text and translucent black scrims over the
/// hero image.
#[derive(Debug, Clone, Copy)]
pub struct SeaJourneyTheme;

impl SeaJourneyTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.03, 0.09, 0.14); // deep sea, shown until the hero loads
    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.4);
    pub const CAPTION_SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
    pub const CONTROL: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
    pub const CONTROL_HOVER: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

    pub const INPUT_BG: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.1);
    pub const INPUT_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.2);
    pub const INPUT_RING: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.4);

    pub const SUCCESS: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const ERROR: Color = Color::from_rgb(0.94, 0.27, 0.27);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Color::WHITE;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Sea Journey", palette)
    }
}

#[derive(Debug)]
pub enum Container {
    Backdrop,
    Scrim,
    Slide,
    Caption,
    Toast,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Backdrop => |_| container::Style {
                background: Some(Background::Color(SeaJourneyTheme::BACKGROUND)),
                ..Default::default()
            },
            Container::Scrim => |_| container::Style {
                background: Some(Background::Color(SeaJourneyTheme::SCRIM)),
                ..Default::default()
            },
            Container::Slide => |_| container::Style {
                background: Some(Background::Color(SeaJourneyTheme::CAPTION_SCRIM)),
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Container::Caption => |_| container::Style {
                text_color: Some(SeaJourneyTheme::TEXT_PRIMARY),
                background: Some(Background::Color(SeaJourneyTheme::CAPTION_SCRIM)),
                ..Default::default()
            },
            Container::Toast => |_| container::Style {
                text_color: Some(Color::BLACK),
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                    offset: iced::Vector::new(0.0, 3.0),
                    blur_radius: 10.0,
                },
                ..Default::default()
            },
        }
    }
}

#[derive(Debug)]
pub enum Button {
    /// Solid white call to action.
    Primary,
    /// Round translucent chevron over the slides.
    Chevron,
    Indicator { active: bool },
    Link,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let (background, text_color) = match status {
                    button::Status::Hovered => (Color::from_rgba(1.0, 1.0, 1.0, 0.9), Color::BLACK),
                    button::Status::Disabled => (
                        Color::from_rgba(1.0, 1.0, 1.0, 0.5),
                        Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    ),
                    _ => (Color::WHITE, Color::BLACK),
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color,
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            },
            Button::Chevron => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SeaJourneyTheme::CONTROL_HOVER
                    }
                    _ => SeaJourneyTheme::CONTROL,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: SeaJourneyTheme::TEXT_PRIMARY,
                    border: Border {
                        radius: 999.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            },
            Button::Indicator { active: true } => |_, _| button::Style {
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    radius: 999.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Button::Indicator { active: false } => |_, status| {
                let alpha = if matches!(status, button::Status::Hovered) {
                    0.75
                } else {
                    0.5
                };
                button::Style {
                    background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha))),
                    border: Border {
                        radius: 999.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            },
            Button::Link => |_, status| button::Style {
                background: None,
                text_color: if matches!(status, button::Status::Hovered) {
                    SeaJourneyTheme::TEXT_MUTED
                } else {
                    SeaJourneyTheme::TEXT_PRIMARY
                },
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct TextInput;

impl TextInput {
    pub fn style() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_, status| {
            let (border_color, border_width) = match status {
                text_input::Status::Focused { .. } => (SeaJourneyTheme::INPUT_RING, 2.0),
                _ => (SeaJourneyTheme::INPUT_BORDER, 1.0),
            };

            let value = match status {
                text_input::Status::Disabled => SeaJourneyTheme::TEXT_PLACEHOLDER,
                _ => SeaJourneyTheme::TEXT_PRIMARY,
            };

            text_input::Style {
                background: Background::Color(SeaJourneyTheme::INPUT_BG),
                border: Border {
                    color: border_color,
                    width: border_width,
                    radius: 8.0.into(),
                },
                icon: SeaJourneyTheme::TEXT_MUTED,
                placeholder: SeaJourneyTheme::TEXT_PLACEHOLDER,
                value,
                selection: SeaJourneyTheme::INPUT_RING,
            }
        }
    }
}

pub fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}
