/// Main screen: header, profile section and the sorted photo list
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, text, Column, Space,
};
use iced::{Alignment, Border, Color, ContentFit, Element, Length};

use super::{card, filled, spinner, BACKGROUND, BOLD, PLACEHOLDER, PRIMARY, TEXT_DARK, TEXT_MUTED};
use crate::state::data::{PhotoEntry, ProfilePhoto};
use crate::state::gallery::Gallery;
use crate::state::session::Session;
use crate::Message;

const AVATAR_SIZE: f32 = 60.0;
const PHOTO_HEIGHT: f32 = 200.0;

pub fn view<'a>(
    session: &'a Session,
    profile: &'a ProfilePhoto,
    gallery: &'a Gallery,
    capturing: bool,
    loading: bool,
    phase: f32,
) -> Element<'a, Message> {
    let content = column![
        header(session),
        profile_section(session, profile, capturing),
        photo_list(gallery, loading, phase),
    ];

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(filled(BACKGROUND))
        .into()
}

fn header(session: &Session) -> Element<'_, Message> {
    let title = text("Photo Gallery")
        .size(24)
        .font(BOLD)
        .color(Color::WHITE)
        .width(Length::Fill)
        .align_x(Horizontal::Center);
    let subtitle = text(format!("Welcome: {}", session.display_name()))
        .size(14)
        .color(Color::WHITE)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    container(column![title, subtitle].spacing(5))
        .padding(20)
        .width(Length::Fill)
        .style(filled(PRIMARY))
        .into()
}

fn profile_section<'a>(
    session: &'a Session,
    profile: &'a ProfilePhoto,
    capturing: bool,
) -> Element<'a, Message> {
    let avatar: Element<'a, Message> = match profile.path() {
        Some(path) => image(Handle::from_path(path))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("No photo").size(12).color(TEXT_MUTED))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .center_x(Length::Fixed(AVATAR_SIZE))
            .center_y(Length::Fixed(AVATAR_SIZE))
            .style(|_theme| container::Style {
                background: Some(PLACEHOLDER.into()),
                border: Border {
                    radius: (AVATAR_SIZE / 2.0).into(),
                    width: 2.0,
                    color: Color::from_rgb(0.871, 0.886, 0.902),
                },
                ..container::Style::default()
            })
            .into(),
    };

    let info = row![
        avatar,
        text(session.display_name()).size(18).font(BOLD).color(TEXT_DARK),
    ]
    .spacing(15)
    .align_y(Alignment::Center);

    let take_photo = button(
        text("Take Profile Photo")
            .size(16)
            .font(BOLD)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe((!capturing).then_some(Message::TakePhoto))
    .padding(15)
    .width(Length::Fill)
    .style(button::success);

    container(column![info, take_photo].spacing(15))
        .padding(20)
        .width(Length::Fill)
        .style(card)
        .into()
}

fn photo_list(gallery: &Gallery, loading: bool, phase: f32) -> Element<'_, Message> {
    let refresh = button(text("Refresh").size(14))
        .on_press_maybe((!loading).then_some(Message::Refresh))
        .padding([6, 12])
        .style(button::secondary);

    let title_bar = row![
        text("Photo Gallery (A-Z)").size(18).font(BOLD).color(TEXT_DARK),
        horizontal_space(),
        refresh,
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if loading {
        container(
            column![
                spinner(phase),
                text("Loading photos...").size(16).color(TEXT_MUTED),
            ]
            .spacing(10)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    } else if gallery.photos().is_empty() {
        container(text("No photos to show").size(16).color(TEXT_MUTED))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        let cards = gallery
            .photos()
            .iter()
            .map(|photo| photo_card(photo, gallery.thumbnail(&photo.id)));

        scrollable(Column::with_children(cards).spacing(16))
            .height(Length::Fill)
            .into()
    };

    column![title_bar, body]
        .spacing(15)
        .padding(10)
        .height(Length::Fill)
        .into()
}

fn photo_card<'a>(photo: &'a PhotoEntry, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PHOTO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Still downloading, or the download failed
        None => container(Space::new(Length::Fill, Length::Fixed(PHOTO_HEIGHT)))
            .style(filled(PLACEHOLDER))
            .into(),
    };

    container(
        column![
            picture,
            text(format!("Author: {}", photo.author)).size(16).font(BOLD).color(TEXT_DARK),
            text(format!("Size: {} x {}", photo.width, photo.height)).size(14).color(TEXT_MUTED),
        ]
        .spacing(6),
    )
    .padding(15)
    .width(Length::Fill)
    .style(card)
    .into()
}
