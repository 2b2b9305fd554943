/// Full-screen progress display shown between login and the gallery
use iced::widget::image::Handle;
use iced::widget::{column, container, image, stack, text};
use iced::{Alignment, Border, Color, ContentFit, Element, Length};

use super::{filled, spinner, BOLD};
use crate::Message;

pub fn view(backdrop: Option<&Handle>, phase: f32) -> Element<'_, Message> {
    let panel = column![
        text("Loading Gallery").size(24).font(BOLD).color(Color::WHITE),
        spinner(phase),
        text("Preparing your experience...").size(16).color(Color::WHITE),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    let overlay = container(panel).padding(40).style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    let centered = container(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    match backdrop {
        Some(handle) => stack![
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
            centered,
        ]
        .into(),
        // Backdrop not downloaded (yet, or at all)
        None => container(centered)
            .style(filled(Color::from_rgb(0.25, 0.27, 0.30)))
            .into(),
    }
}
