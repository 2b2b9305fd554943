/// User interface
///
/// One view function per screen, plus the modal alert overlay. Shared
/// colors, fonts and container styles live here.

pub mod alert;
pub mod gallery;
pub mod login;
pub mod progress;

use iced::widget::{container, progress_bar};
use iced::{font, Border, Color, Element, Font, Length, Shadow, Theme, Vector};

use crate::Message;

pub const PRIMARY: Color = Color::from_rgb(0.0, 0.482, 1.0);
pub const TEXT_DARK: Color = Color::from_rgb(0.2, 0.2, 0.2);
pub const TEXT_MUTED: Color = Color::from_rgb(0.424, 0.459, 0.490);
pub const PLACEHOLDER: Color = Color::from_rgb(0.914, 0.925, 0.937);
pub const BACKGROUND: Color = Color::from_rgb(0.973, 0.976, 0.980);

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// White rounded card with a soft shadow
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..container::Style::default()
    }
}

/// Flat filled background
pub fn filled(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(color.into()),
        ..container::Style::default()
    }
}

/// Indeterminate activity bar; `phase` cycles through 0.0..1.0
pub fn spinner<'a>(phase: f32) -> Element<'a, Message> {
    let value = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };

    progress_bar(0.0..=1.0, value)
        .width(Length::Fixed(200.0))
        .height(Length::Fixed(6.0))
        .into()
}
