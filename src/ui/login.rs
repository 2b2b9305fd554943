use iced::alignment::Horizontal;
use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use super::{filled, BOLD, TEXT_DARK};
use crate::state::session::{Field, Session};
use crate::Message;

/// Login form: three inputs and a submit button
pub fn view(session: &Session) -> Element<'_, Message> {
    let title = text("Sign In")
        .size(28)
        .font(BOLD)
        .color(TEXT_DARK)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let first_name = text_input("First name (letters only)", &session.first_name)
        .on_input(|value| Message::FieldChanged(Field::FirstName, value))
        .on_submit(Message::Submit)
        .padding(15)
        .size(16);

    let last_name = text_input("Last name (letters only)", &session.last_name)
        .on_input(|value| Message::FieldChanged(Field::LastName, value))
        .on_submit(Message::Submit)
        .padding(15)
        .size(16);

    let password = text_input("Password (at least 6 characters)", &session.password)
        .on_input(|value| Message::FieldChanged(Field::Password, value))
        .on_submit(Message::Submit)
        .secure(true)
        .padding(15)
        .size(16);

    let submit = button(
        text("Log In")
            .size(18)
            .font(BOLD)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Submit)
    .padding(16)
    .width(Length::Fill)
    .style(button::primary);

    let form = column![title, first_name, last_name, password, submit]
        .spacing(15)
        .max_width(420.0);

    container(form)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(filled(iced::Color::WHITE))
        .into()
}
