use iced::widget::{button, column, container, horizontal_space, opaque, row, stack, text};
use iced::{Color, Element, Length};

use super::{card, BOLD, TEXT_DARK};
use crate::state::alert::Alert;
use crate::Message;

/// Draw `alert` as a modal over `base`; input to `base` is blocked until
/// the alert is dismissed
pub fn overlay<'a>(base: Element<'a, Message>, alert: Option<&'a Alert>) -> Element<'a, Message> {
    let Some(alert) = alert else {
        return base;
    };

    let dialog = container(
        column![
            text(alert.title.as_str()).size(20).font(BOLD).color(TEXT_DARK),
            text(alert.message.as_str()).size(16).color(TEXT_DARK),
            row![
                horizontal_space(),
                button(text("OK").size(16))
                    .on_press(Message::DismissAlert)
                    .padding([8, 20])
                    .style(button::primary),
            ],
        ]
        .spacing(15),
    )
    .padding(20)
    .max_width(360.0)
    .style(card);

    let scrim = container(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
            ..container::Style::default()
        });

    stack![base, opaque(scrim)].into()
}
